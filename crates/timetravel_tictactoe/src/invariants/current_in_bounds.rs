//! The current index always names a snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= current < history.len()`.
pub struct CurrentInBoundsInvariant;

impl Invariant<GameState> for CurrentInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current < game.history.len()
    }

    fn description() -> &'static str {
        "Current index points inside the history"
    }
}
