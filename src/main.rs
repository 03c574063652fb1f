//! Wordle Game - CLI
//!
//! Play a round of Wordle in a full-screen TUI or in a simple line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_guess},
    game::{DEFAULT_SECRET, GameConfig, MAX_ATTEMPTS, WORD_LENGTH},
    logging,
    output::{print_round_summary, print_score_result, print_statistics},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word to guess
    #[arg(short, long, global = true, env = "WORDLE_SECRET", default_value = DEFAULT_SECRET)]
    secret: String,

    /// Number of letters per word
    #[arg(short, long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Number of attempts per round
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show the feedback for one guess against the secret
    Score {
        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref()).context("failed to initialize logging")?;

    let config = GameConfig::new(&cli.secret, cli.length, cli.max_attempts)
        .context("invalid game configuration")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(config),
        Commands::Score { guess } => run_score_command(&config, &guess),
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = run_tui(App::new(config))?;

    if app.controller.session().is_terminal() {
        print_round_summary(app.controller.session());
    }
    if app.stats.total_games > 0 {
        print_statistics(&app.stats);
    }
    Ok(())
}

fn run_simple_command(config: GameConfig) -> Result<()> {
    run_simple(config).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run_score_command(config: &GameConfig, guess: &str) -> Result<()> {
    let result = score_guess(config, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result.guess, &result.feedback);
    Ok(())
}
