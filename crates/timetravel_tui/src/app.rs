//! Application state and key handling.

use crate::input::{self, Action, Direction};
use crossterm::event::{KeyEvent, KeyEventKind};
use timetravel_tictactoe::{Event, GameState, GameView, HistoryError, Position};
use tracing::{debug, info, instrument};

/// Pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
///
/// The game itself lives in an immutable [`GameState`]; `App` only swaps
/// it for the reduced state and tracks UI-local things like cursors.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game.
    pub fn new(show_help: bool) -> Self {
        Self::with_game(GameState::new(), show_help)
    }

    /// Creates an app around an existing game.
    pub fn with_game(game: GameState, show_help: bool) -> Self {
        let selected = game.current_index();
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::default(),
            selected,
            notice: None,
            show_help,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Render model of the current game state.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Why the last click was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the key help line is drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    ///
    /// # Errors
    ///
    /// Propagates [`HistoryError`] from the engine. Jumps are built from the
    /// current history length, so this only fires on a broken invariant.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), HistoryError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let Some(action) = input::action_for(key) else {
            return Ok(());
        };
        debug!(?action, "Key action");

        match action {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Action::Restart => self.restart(),
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_index();
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::Activate => match self.focus {
                Focus::Board => self.dispatch(Event::CellClicked(self.cursor))?,
                Focus::History => self.dispatch(Event::HistoryEntryClicked(self.selected))?,
            },
            Action::Cell(pos) => {
                self.cursor = pos;
                self.dispatch(Event::CellClicked(pos))?;
            }
            Action::JumpToStart => self.dispatch(Event::HistoryEntryClicked(0))?,
            Action::JumpToLatest => {
                let last = self.game.history().len() - 1;
                self.dispatch(Event::HistoryEntryClicked(last))?;
            }
        }
        Ok(())
    }

    /// Reduces one engine event into the app's game.
    ///
    /// Refused moves leave the game as it was and set [`App::notice`].
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] for jumps past the end of the history.
    #[instrument(skip(self), fields(step = self.game.current_index()))]
    pub fn dispatch(&mut self, event: Event) -> Result<(), HistoryError> {
        match event {
            Event::CellClicked(pos) => match self.game.try_apply_move(pos) {
                Ok(next) => {
                    self.game = next;
                    self.notice = None;
                }
                Err(reason) => {
                    debug!(%reason, "Click ignored");
                    self.notice = Some(reason.to_string());
                }
            },
            Event::HistoryEntryClicked(_) => {
                self.game = self.game.reduce(event)?;
                self.notice = None;
            }
        }
        self.selected = self.game.current_index();
        Ok(())
    }

    /// Restarts with a fresh game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.cursor = Position::Center;
        self.selected = 0;
        self.notice = None;
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = input::move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.game.history().len() - 1;
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(last),
                };
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}
