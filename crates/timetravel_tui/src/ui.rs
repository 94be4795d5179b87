//! Stateless UI rendering.
//!
//! Everything is drawn from [`App`] and its [`GameView`] on every frame.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetravel_tictactoe::{GameView, Position};

const HELP: &str =
    "Arrows: move | Enter: select | 1-9: place | Tab: board/history | g/G: start/latest | R: restart | Q: quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let help_height = if app.show_help() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Min(13),             // Board + history
            Constraint::Length(3),           // Status
            Constraint::Length(help_height), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &view);
    draw_history(frame, body[1], app, &view);

    let status_line = match app.notice() {
        Some(notice) => format!("{} | {}", view.status, notice),
        None => view.status.clone(),
    };
    let status = Paragraph::new(status_line)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, view, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &GameView, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, view, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &GameView, pos: Position) {
    let label = view.cells[pos.to_index()].as_str();

    let (symbol, mut style) = match label {
        "X" => ("X".to_string(), Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        "O" => ("O".to_string(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        _ => ((pos.to_index() + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    if view
        .winning_line
        .is_some_and(|line| line.contains(&pos))
    {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center within the 3-line cell.
    let text = vec![Line::default(), Line::from(Span::styled(format!(" {} ", symbol), style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label.clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("History", focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(focused.then_some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
