//! TUI rendering with ratatui
//!
//! Draws the guess board, the message surface and a key-help bar.

use super::app::App;
use crate::game::{CellColor, GameStatus, GuessRow};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.game.attempts_total() * 2 + 1).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(board_height + 2),    // Board
            Constraint::Length(3),                // Message surface
            Constraint::Length(3),                // Key help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W W W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::default()];
    for row in app.game.rows() {
        lines.push(board_row_line(row, app));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn board_row_line<'a>(row: &GuessRow, app: &App) -> Line<'a> {
    let mut spans = Vec::with_capacity(row.word_length() * 2);
    for cell in 0..row.word_length() {
        let letter = row
            .letter_at(cell)
            .map_or_else(|| "   ".to_string(), |ch| format!(" {} ", ch.to_ascii_uppercase()));
        spans.push(Span::styled(letter, cell_style(row, cell, app)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn cell_style(row: &GuessRow, cell: usize, app: &App) -> Style {
    if let Some(color) = row.color_at(cell) {
        let bg = match color {
            CellColor::Green => Color::Green,
            CellColor::Yellow => Color::Yellow,
            CellColor::Grey => Color::DarkGray,
        };
        return Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
    }

    if row.is_active() {
        let style = Style::default().fg(Color::White).bg(Color::Black);
        if cell == app.cursor {
            return style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        return style.add_modifier(Modifier::BOLD);
    }

    Style::default().fg(Color::DarkGray).bg(Color::Black)
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let style = match app.game.status() {
        GameStatus::Won => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        GameStatus::Lost => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
    };

    let message = Paragraph::new(app.game.message().to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Message ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(message, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.game.status() == GameStatus::InProgress {
        "Type letters │ ←/→ move │ Backspace erase │ Enter submit │ Esc quit"
    } else {
        "Press q or Esc to quit"
    };

    let bar = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(bar, area);
}
