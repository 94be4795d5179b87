//! Game state and the event reducer.

use super::error::{HistoryError, MoveError};
use super::{Board, History, Player, Position, rules};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, instrument};

/// Status of the current snapshot, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line completed yet; `next` moves.
    ///
    /// A full board without a line also lands here.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line is complete. Moves are refused until the user jumps back.
    Won(Player),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(winner) => write!(f, "Winner: {}", winner),
        }
    }
}

/// User input the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A board cell was clicked.
    CellClicked(Position),
    /// A history entry was clicked; carries the move number.
    HistoryEntryClicked(usize),
}

/// Complete game state: the snapshot history and which snapshot is current.
///
/// Every operation takes `&self` and returns a new state, so earlier states
/// (and the snapshots they point at) stay valid. The player to move is not
/// stored; it follows from the parity of the current index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current: usize,
}

impl GameState {
    /// Creates a new game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current: 0,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the current snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current snapshot.
    pub fn current(&self) -> &Board {
        &self.history.snapshots()[self.current]
    }

    /// Player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current)
    }

    /// Winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current())
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Places the next player's mark at `pos`, reporting why a move is refused.
    ///
    /// On success the history is cut back to the current snapshot before the
    /// new one is appended, discarding any snapshots left over from a jump.
    /// On refusal nothing changes, including the history.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        let board = self.current();

        if let Some(winner) = rules::check_winner(board) {
            return Err(MoveError::GameOver(winner));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next = Self {
            history: self.history.branch(self.current, board.with_mark(pos, player)),
            current: self.current + 1,
        };

        #[cfg(debug_assertions)]
        next.check_invariants()?;

        debug!(%player, position = %pos, step = next.current, "Move applied");
        Ok(next)
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Clicking an occupied square, or any square once the game is won, is
    /// ignored: the returned state equals `self`. A failed postcondition is
    /// logged as an error and the move is dropped the same way.
    pub fn apply_move(&self, pos: Position) -> Self {
        match self.try_apply_move(pos) {
            Ok(next) => next,
            Err(MoveError::InvariantViolation(reason)) => {
                error!(%reason, position = %pos, "Move broke an engine invariant");
                self.clone()
            }
            Err(reason) => {
                debug!(%reason, "Move ignored");
                self.clone()
            }
        }
    }

    /// [`apply_move`](Self::apply_move) for a raw cell index.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::CellOutOfRange`] if `index` is not in 0-8.
    pub fn apply_index(&self, index: usize) -> Result<Self, HistoryError> {
        let pos = Position::from_index(index).ok_or(HistoryError::CellOutOfRange(index))?;
        Ok(self.apply_move(pos))
    }

    /// Makes snapshot `target` current. The history itself is kept, so later
    /// snapshots stay reachable until the next accepted move.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `target` is past the end
    /// of the history.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&self, target: usize) -> Result<Self, HistoryError> {
        let len = self.history.len();
        if target >= len {
            return Err(HistoryError::MoveOutOfRange {
                requested: target,
                len,
            });
        }
        debug!(target, "Jumped");
        Ok(Self {
            history: self.history.clone(),
            current: target,
        })
    }

    /// Reduces one user event into the next state.
    ///
    /// # Errors
    ///
    /// Only out-of-range history jumps fail; refused moves are no-ops.
    #[instrument(skip(self))]
    pub fn reduce(&self, event: Event) -> Result<Self, HistoryError> {
        match event {
            Event::CellClicked(pos) => Ok(self.apply_move(pos)),
            Event::HistoryEntryClicked(target) => self.jump_to(target),
        }
    }

    /// Plays `moves` from a fresh game. Refused moves are skipped.
    #[instrument(skip(moves))]
    pub fn replay(moves: impl IntoIterator<Item = Position>) -> Self {
        moves
            .into_iter()
            .fold(Self::new(), |state, pos| state.apply_move(pos))
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        use super::invariants::{InvariantSet, TimeTravelInvariants};

        TimeTravelInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
