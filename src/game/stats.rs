//! In-memory play statistics for the current process

use super::RoundResult;

/// Results of the rounds played so far
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of attempts used; index 0 is a first-try win
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_attempts],
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: RoundResult) {
        self.total_games += 1;
        match result {
            RoundResult::Won { attempts } => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = attempts
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            RoundResult::Lost => self.current_streak = 0,
        }
    }

    /// Percentage of games won
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statistics() {
        let stats = Statistics::new(6);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.guess_distribution, vec![0; 6]);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_wins_and_losses() {
        let mut stats = Statistics::new(6);
        stats.record(RoundResult::Won { attempts: 3 });
        stats.record(RoundResult::Won { attempts: 1 });
        stats.record(RoundResult::Lost);
        stats.record(RoundResult::Won { attempts: 3 });

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, vec![1, 0, 2, 0, 0, 0]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
