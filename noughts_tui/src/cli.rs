//! Command-line interface for the noughts TUI.

use crate::app::ViewOptions;
use clap::Parser;
use noughts_core::{Difficulty, GameMode, MatchConfig};
use std::time::Duration;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with timed turns and an optional computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start in human-vs-computer mode (the computer plays O)
    #[arg(long)]
    pub vs_computer: bool,

    /// Computer skill tier
    #[arg(long, value_enum, default_value_t = DifficultyArg::Easy)]
    pub difficulty: DifficultyArg,

    /// Seconds each player has per turn
    #[arg(long, default_value_t = 10)]
    pub turn_seconds: u64,

    /// Hide the turn timer and disable expiry auto-pass
    #[arg(long)]
    pub hide_timer: bool,

    /// Hide the score tally
    #[arg(long)]
    pub hide_scores: bool,
}

/// Skill tier as a CLI value.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyArg {
    /// Random moves
    Easy,
    /// Wins and blocks
    Medium,
    /// Wins, blocks, and plays positionally
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

impl Cli {
    /// Splits the flags into engine configuration and view options.
    pub fn into_settings(self) -> (MatchConfig, ViewOptions) {
        let mode = if self.vs_computer {
            GameMode::HumanVsComputer
        } else {
            GameMode::HumanVsHuman
        };
        (
            MatchConfig {
                mode,
                difficulty: self.difficulty.into(),
                turn_budget: Duration::from_secs(self.turn_seconds),
            },
            ViewOptions {
                show_timer: !self.hide_timer,
                show_scores: !self.hide_scores,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_pvp_with_timer_and_scores() {
        let cli = Cli::parse_from(["noughts"]);
        let (config, view) = cli.into_settings();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.turn_budget, Duration::from_secs(10));
        assert!(view.show_timer);
        assert!(view.show_scores);
    }

    #[test]
    fn test_flags_map_through() {
        let cli = Cli::parse_from([
            "noughts",
            "--vs-computer",
            "--difficulty",
            "hard",
            "--turn-seconds",
            "30",
            "--hide-timer",
        ]);
        let (config, view) = cli.into_settings();
        assert_eq!(config.mode, GameMode::HumanVsComputer);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.turn_budget, Duration::from_secs(30));
        assert!(!view.show_timer);
        assert!(view.show_scores);
    }
}
