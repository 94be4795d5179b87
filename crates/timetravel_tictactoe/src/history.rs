//! Move history store.
//!
//! An ordered sequence of board snapshots. Index 0 is always the empty
//! board. Snapshots are only ever added by [`History::branch`], which
//! builds a new history and leaves the receiver untouched.

use super::Board;
use serde::Serialize;
use tracing::instrument;

/// Ordered, never-empty sequence of board snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the history truncated to `[0, at]` with `board` appended.
    ///
    /// Snapshots after `at` are dropped from the returned history only;
    /// `self` keeps them.
    #[instrument(level = "debug", skip(self, board), fields(len = self.len()))]
    pub fn branch(&self, at: usize, board: Board) -> Self {
        let keep = (at + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(board);
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
