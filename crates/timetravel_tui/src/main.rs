//! Time-travel tic-tac-toe - terminal UI and replay CLI.

use anyhow::Result;
use clap::Parser;
use timetravel_tui::{App, Cli, Command, TuiConfig, logging, replay, runner};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play => {
            logging::init_file_logging(&config)?;
            info!("Starting time-travel tic-tac-toe");
            runner::run_tui(App::new(*config.show_help()))
        }
        Command::Replay { moves, jump, json } => {
            logging::init_stderr_logging(&config);
            let output = replay::run_replay(&moves, jump, json)?;
            print!("{}", output);
            Ok(())
        }
    }
}
