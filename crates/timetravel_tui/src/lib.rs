//! Terminal front end for time-travel tic-tac-toe.
//!
//! Turns key presses into [`Event`](timetravel_tictactoe::Event)s, reduces
//! them through the game engine and redraws the whole frame from the new
//! state. Also hosts the non-interactive `replay` command.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod runner;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
