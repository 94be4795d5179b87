//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with a move history you can jump around in", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay moves and print the resulting view
    Replay {
        /// Comma-separated cell numbers (0-8) or labels, e.g. `0,center,3`
        #[arg(long, value_delimiter = ',')]
        moves: Vec<String>,

        /// Jump to this move number after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The chosen command, `play` if none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["timetravel"]).unwrap();
        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "timetravel",
            "replay",
            "--moves",
            "0,1,3",
            "--jump",
            "2",
            "--json",
            "--config",
            "tt.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec!["0".to_string(), "1".to_string(), "3".to_string()],
                jump: Some(2),
                json: true,
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("tt.toml")));
    }

    #[test]
    fn test_replay_accepts_labels() {
        let cli =
            Cli::try_parse_from(["timetravel", "replay", "--moves", "0,center,Top-right"]).unwrap();
        let Command::Replay { moves, jump, json } = cli.command() else {
            panic!("expected replay");
        };
        assert_eq!(moves, ["0", "center", "Top-right"]);
        assert_eq!(jump, None);
        assert!(!json);

        let game = crate::replay::replay(&moves, jump).unwrap();
        assert_eq!(
            game.current().get(timetravel_tictactoe::Position::Center),
            timetravel_tictactoe::Square::Occupied(timetravel_tictactoe::Player::O)
        );
    }

    #[test]
    fn test_rejects_non_numeric_jump() {
        assert!(Cli::try_parse_from(["timetravel", "replay", "--moves", "0", "--jump", "x"]).is_err());
    }
}
