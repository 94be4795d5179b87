//! Tic-tac-toe game state engine with time travel.
//!
//! The engine is an immutable [`GameState`] value plus a pure reducer.
//! Every accepted move appends a new board snapshot to the history, and
//! any earlier snapshot can be made current again with [`GameState::jump_to`].
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: pure winner evaluation over the eight fixed lines
//! - **History**: append/truncate store of board snapshots
//! - **State**: [`GameState`] and the [`Event`] reducer
//! - **View**: [`GameView`], the framework-independent render model
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, GameStatus, Player, Position};
//!
//! let game = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
//!
//! let rewound = game.jump_to(1).expect("move #1 exists");
//! assert_eq!(rewound.next_player(), Player::O);
//! assert_eq!(rewound.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use error::{HistoryError, MoveError};
pub use history::History;
pub use invariants::{
    AlternatingMarkersInvariant, CurrentInBoundsInvariant, Invariant, InvariantSet,
    InvariantViolation, SingleStepInvariant, TimeTravelInvariants,
};
pub use position::Position;
pub use rules::check_winner;
pub use state::{Event, GameState, GameStatus};
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryEntry};
