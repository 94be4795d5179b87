//! Property-based tests for the game state engine.

use proptest::prelude::*;
use timetravel_tictactoe::{
    Board, Event, GameState, InvariantSet, Player, Position, Square, TimeTravelInvariants,
    rules::LINES,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

/// Any board, reachable or not.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_square()).prop_map(Board::from_squares)
}

fn arb_position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|i| Position::ALL[i])
}

/// A mix of cell clicks and history clicks. Jump targets are reduced modulo
/// the history length when applied so every event is in range.
fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    proptest::collection::vec(
        prop_oneof![
            3 => arb_position().prop_map(Event::CellClicked),
            1 => (0usize..10).prop_map(Event::HistoryEntryClicked),
        ],
        0..30,
    )
}

/// A state reachable from a new game through UI events.
fn arb_state() -> impl Strategy<Value = GameState> {
    arb_events().prop_map(|events| {
        events.into_iter().fold(GameState::new(), |state, event| {
            let event = match event {
                Event::HistoryEntryClicked(n) => {
                    Event::HistoryEntryClicked(n % state.history().len())
                }
                click => click,
            };
            state.reduce(event).expect("jump target in range")
        })
    })
}

// =============================================================================
// Winner evaluation
// =============================================================================

proptest! {
    #[test]
    fn winner_implies_complete_line(board in arb_board()) {
        if let Some(player) = timetravel_tictactoe::check_winner(&board) {
            let owned = Square::Occupied(player);
            prop_assert!(LINES
                .iter()
                .any(|line| line.iter().all(|pos| board.get(*pos) == owned)));
        } else {
            for line in LINES {
                let first = board.get(line[0]);
                prop_assert!(
                    first == Square::Empty || line.iter().any(|pos| board.get(*pos) != first)
                );
            }
        }
    }
}

// =============================================================================
// Move history laws
// =============================================================================

proptest! {
    #[test]
    fn reachable_states_satisfy_invariants(state in arb_state()) {
        prop_assert!(TimeTravelInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn next_player_follows_parity(state in arb_state()) {
        let expected = if state.current_index() % 2 == 0 { Player::X } else { Player::O };
        prop_assert_eq!(state.next_player(), expected);
    }

    #[test]
    fn occupied_click_is_noop(state in arb_state()) {
        for pos in Position::ALL {
            if !state.current().is_empty(pos) {
                prop_assert_eq!(state.apply_move(pos), state.clone());
            }
        }
    }

    #[test]
    fn won_game_ignores_moves(state in arb_state(), pos in arb_position()) {
        if state.winner().is_some() {
            prop_assert_eq!(state.apply_move(pos), state.clone());
        }
    }

    #[test]
    fn jump_then_move_truncates(
        state in arb_state(),
        target in 0usize..10,
        pos in arb_position(),
    ) {
        let k = target % state.history().len();
        let rewound = state.jump_to(k).unwrap();
        prop_assert_eq!(rewound.history(), state.history());

        if let Ok(next) = rewound.try_apply_move(pos) {
            prop_assert_eq!(next.history().len(), k + 2);
            prop_assert_eq!(next.current_index(), k + 1);
            prop_assert_eq!(
                &next.history().snapshots()[..=k],
                &state.history().snapshots()[..=k]
            );
            prop_assert_eq!(
                next.current().get(pos),
                Square::Occupied(rewound.next_player())
            );
        }
    }
}
