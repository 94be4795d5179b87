//! Error types for the game state engine.

use super::{Player, Position};

/// Reason a move was refused.
///
/// [`GameState::apply_move`](crate::GameState::apply_move) turns every
/// refusal into a no-op; [`GameState::try_apply_move`](crate::GameState::try_apply_move)
/// hands the reason back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Contract violation on an index coming from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Jump target does not name a snapshot in the history.
    #[display("Move #{} does not exist (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// Requested snapshot index.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),
}

impl std::error::Error for HistoryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_payload_is_not_a_source() {
        let occupied: Box<dyn Error> = Box::new(MoveError::SquareOccupied(Position::Center));
        assert_eq!(occupied.to_string(), "Square Center is already occupied");
        assert!(occupied.source().is_none());

        let out_of_range: Box<dyn Error> = Box::new(HistoryError::CellOutOfRange(9));
        assert_eq!(out_of_range.to_string(), "Cell 9 is out of range (must be 0-8)");
        assert!(out_of_range.source().is_none());
    }
}
