//! Key bindings and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timetravel_tictactoe::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Start a fresh game.
    Restart,
    /// Switch focus between the board and the history list.
    ToggleFocus,
    /// Move the cursor of the focused pane.
    Navigate(Direction),
    /// Click whatever is under the cursor of the focused pane.
    Activate,
    /// Click a cell directly (keys `1`-`9`).
    Cell(Position),
    /// Jump to the starting board.
    JumpToStart,
    /// Jump to the newest snapshot.
    JumpToLatest,
}

/// Maps a key press to an action, if it is bound.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r' | 'R') => Some(Action::Restart),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Up => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::JumpToStart),
        KeyCode::End | KeyCode::Char('G') => Some(Action::JumpToLatest),
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_index(c as usize - '1' as usize).map(Action::Cell)
        }
        _ => None,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
