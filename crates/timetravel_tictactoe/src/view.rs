//! Render model for presentation layers.
//!
//! A [`GameView`] is everything a front end needs to draw one frame: the
//! nine cell labels, the status line and the list of jump targets. It is
//! rebuilt from the [`GameState`] after every event.

use super::{GameState, Position, rules};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One clickable entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    /// Snapshot index this entry jumps to.
    pub move_number: usize,
    /// Button label.
    pub label: String,
    /// Whether this snapshot is the current one.
    pub is_current: bool,
}

impl HistoryEntry {
    /// Label for the entry jumping to `move_number`.
    pub fn label_for(move_number: usize) -> String {
        if move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", move_number)
        }
    }
}

/// Framework-independent rendering of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cell labels in row-major order: `""`, `"X"` or `"O"`.
    pub cells: [String; 9],
    /// `"Winner: <marker>"` or `"Next player: <marker>"`.
    pub status: String,
    /// Completed line on the current snapshot, for highlighting.
    pub winning_line: Option<[Position; 3]>,
    /// One entry per snapshot, in order.
    pub moves: Vec<HistoryEntry>,
}

impl From<&GameState> for GameView {
    #[instrument(level = "trace", skip(state), fields(current = state.current_index()))]
    fn from(state: &GameState) -> Self {
        let board = state.current();
        let current = state.current_index();
        Self {
            cells: board.squares().map(|square| square.label().to_string()),
            status: state.status().to_string(),
            winning_line: rules::winning_line(board).map(|(_, line)| line),
            moves: (0..state.history().len())
                .map(|n| HistoryEntry::new(n, HistoryEntry::label_for(n), n == current))
                .collect(),
        }
    }
}

impl GameState {
    /// Builds the render model for the current snapshot.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}
