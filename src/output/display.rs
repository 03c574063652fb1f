//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, share_grid};
use crate::core::{Feedback, Word};
use crate::game::{Session, Statistics};
use colored::Colorize;

/// Print the classification of a single guess
pub fn print_score_result(guess: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Guess: {}", guess.text().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(guess, feedback));
    println!("  {}  ({feedback})", feedback.to_emoji());
    println!(
        "\n  Exact: {}  Present: {}",
        feedback.count_exact().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );

    if feedback.is_solved() {
        println!("\n{}", "✅ That's the word!".green().bold());
    }
}

/// Print the share grid of a finished round
pub fn print_round_summary(session: &Session) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    for line in share_grid(session).lines() {
        println!("  {line}");
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print statistics for the rounds played so far
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:        {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Streak:        {}", stats.current_streak);
    println!("   Max streak:    {}", stats.max_streak);

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
