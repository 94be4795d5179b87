//! Players alternate, starting with X.

use super::Invariant;
use super::single_step::added_mark;
use crate::{GameState, Player, Square};

/// Invariant: the mark added by step `i -> i + 1` belongs to X for even `i`
/// and to O for odd `i`.
pub struct AlternatingMarkersInvariant;

impl Invariant<GameState> for AlternatingMarkersInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match added_mark(&pair[0], &pair[1]) {
                Some((_, square)) => square == Square::Occupied(Player::for_step(step)),
                // Malformed steps are reported by the single-step invariant.
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
