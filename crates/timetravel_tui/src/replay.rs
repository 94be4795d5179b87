//! Non-interactive replay of a move list.

use anyhow::{Context, Result, anyhow};
use timetravel_tictactoe::{GameState, GameView, Position};
use tracing::{info, instrument};

/// Parses cell numbers (0-8) or labels such as `center`.
///
/// # Errors
///
/// Fails on the first entry that names no cell.
pub fn parse_moves(moves: &[String]) -> Result<Vec<Position>> {
    moves
        .iter()
        .map(|raw| {
            Position::from_label_or_number(raw).ok_or_else(|| anyhow!("Invalid move {}", raw))
        })
        .collect()
}

/// Plays `moves` from a fresh game, then optionally jumps.
///
/// Refused moves (occupied cell, game already won) are skipped the same way
/// the TUI ignores them.
///
/// # Errors
///
/// Fails on an entry that names no cell or a jump past the end of the history.
#[instrument]
pub fn replay(moves: &[String], jump: Option<usize>) -> Result<GameState> {
    let mut game = GameState::replay(parse_moves(moves)?);
    if let Some(target) = jump {
        game = game.jump_to(target).context("Invalid jump")?;
    }
    info!(
        snapshots = game.history().len(),
        current = game.current_index(),
        "Replay finished"
    );
    Ok(game)
}

/// Plain-text rendering: grid, status line, then the move list with the
/// current entry marked `>`.
pub fn render_text(game: &GameState) -> String {
    let view = game.view();
    let mut out = format!("{}\n\n{}\n\n", game.current(), view.status);
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label));
    }
    out
}

/// JSON rendering of the [`GameView`].
pub fn render_json(game: &GameState) -> Result<String> {
    let view: GameView = game.view();
    serde_json::to_string_pretty(&view).context("Failed to serialize view")
}

/// Runs the `replay` command and returns what it prints.
pub fn run_replay(moves: &[String], jump: Option<usize>, json: bool) -> Result<String> {
    let game = replay(moves, jump)?;
    if json {
        render_json(&game)
    } else {
        Ok(render_text(&game))
    }
}
