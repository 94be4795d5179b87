//! Scenario tests for moves, wins and time travel.

use timetravel_tictactoe::{
    Board, Event, GameState, GameStatus, HistoryError, MoveError, Player, Position, Square,
};

fn play(indices: &[usize]) -> GameState {
    indices.iter().fold(GameState::new(), |state, &i| {
        state.apply_index(i).expect("index in range")
    })
}

#[test]
fn test_first_move_is_x() {
    let game = play(&[0]);
    assert_eq!(game.current().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_column_win_freezes_board() {
    let game = play(&[0, 1, 3, 4, 6]);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");

    for pos in Position::ALL {
        assert_eq!(game.apply_move(pos), game);
    }
    assert_eq!(
        game.try_apply_move(Position::BottomRight),
        Err(MoveError::GameOver(Player::X))
    );
}

#[test]
fn test_jump_back_after_win() {
    let won = play(&[0, 1, 3, 4, 6]);
    let rewound = won.jump_to(2).unwrap();

    let expected = Board::new()
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::TopCenter, Player::O);
    assert_eq!(rewound.current(), &expected);
    assert_eq!(rewound.current_index(), 2);
    assert_eq!(rewound.next_player(), Player::X);
    assert_eq!(rewound.status().to_string(), "Next player: X");
    // Later snapshots stay reachable until the next move.
    assert_eq!(rewound.history().len(), 6);
    assert_eq!(rewound.jump_to(5).unwrap().winner(), Some(Player::X));
}

#[test]
fn test_new_move_after_jump_truncates() {
    let won = play(&[0, 1, 3, 4, 6]);
    let branched = won.jump_to(2).unwrap().apply_move(Position::BottomRight);

    assert_eq!(branched.history().len(), 4);
    assert_eq!(branched.current_index(), 3);
    assert_eq!(branched.history().snapshots()[..3], won.history().snapshots()[..3]);
    assert_eq!(
        branched.current().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(branched.winner(), None);
    assert!(branched.jump_to(4).is_err());
}

#[test]
fn test_jump_to_start_and_replay_differently() {
    let game = play(&[4, 0]);
    let restarted = game.jump_to(0).unwrap().apply_move(Position::TopLeft);
    assert_eq!(restarted.history().len(), 2);
    assert_eq!(restarted.current().get(Position::TopLeft), Square::Occupied(Player::X));
    assert!(restarted.current().is_empty(Position::Center));
}

#[test]
fn test_full_board_without_winner_reads_next_player() {
    // X O X / X O O / O X X
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.current().occupied(), 9);
    assert_eq!(game.winner(), None);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_event_stream() {
    let events = [
        Event::CellClicked(Position::Center),
        Event::CellClicked(Position::Center),
        Event::CellClicked(Position::TopLeft),
        Event::HistoryEntryClicked(1),
        Event::CellClicked(Position::BottomLeft),
    ];
    let game = events
        .into_iter()
        .try_fold(GameState::new(), |state, event| state.reduce(event))
        .unwrap();

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current().get(Position::BottomLeft), Square::Occupied(Player::O));
    assert!(game.current().is_empty(Position::TopLeft));
}

#[test]
fn test_out_of_range_jump_is_reported() {
    let err = play(&[4]).reduce(Event::HistoryEntryClicked(7)).unwrap_err();
    assert_eq!(err, HistoryError::MoveOutOfRange { requested: 7, len: 2 });
    assert_eq!(err.to_string(), "Move #7 does not exist (history has 2 entries)");
}

#[test]
fn test_view_serializes_to_json() {
    let view = play(&[4]).view();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["cells"][4], "X");
    assert_eq!(json["moves"][1]["label"], "Go to move #1");
    assert_eq!(json["moves"][1]["is_current"], true);
}
