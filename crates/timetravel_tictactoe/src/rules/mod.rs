//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. Rules keep
//! no state of their own; callers re-run them on every render.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
