//! Each snapshot adds exactly one mark to its predecessor.

use super::Invariant;
use crate::{Board, GameState, Position, Square};

/// Invariant: the history starts empty and every later snapshot equals its
/// predecessor plus one mark on a previously empty square.
pub struct SingleStepInvariant;

/// The single square that changed from empty between two boards.
///
/// `None` if no square changed, more than one did, or a mark was
/// overwritten or removed.
pub(super) fn added_mark(before: &Board, after: &Board) -> Option<(Position, Square)> {
    let mut changed = Position::ALL
        .into_iter()
        .filter(|pos| before.get(*pos) != after.get(*pos));

    let pos = changed.next()?;
    if changed.next().is_some() || !before.is_empty(pos) {
        return None;
    }
    match after.get(pos) {
        Square::Empty => None,
        square => Some((pos, square)),
    }
}

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history.snapshots();
        snapshots.first() == Some(&Board::new())
            && snapshots
                .windows(2)
                .all(|pair| added_mark(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the one before it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_holds_for_played_game() {
        let game = GameState::replay([Position::Center, Position::TopLeft, Position::BottomRight]);
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = GameState::replay([Position::Center, Position::TopLeft]);
        game.history.snapshots[2] = Board::new().with_mark(Position::Center, Player::O);
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut game = GameState::new().apply_move(Position::Center);
        game.history.snapshots.push(*game.current());
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_added_mark() {
        let before = Board::new().with_mark(Position::Center, Player::X);
        let after = before.with_mark(Position::TopRight, Player::O);
        assert_eq!(
            added_mark(&before, &after),
            Some((Position::TopRight, Square::Occupied(Player::O)))
        );
        assert_eq!(added_mark(&after, &before), None);
    }
}
