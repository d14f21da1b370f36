//! Stateless rendering: the whole screen is redrawn from session state.

use crate::app::App;
use noughts_core::{Cell, Coord, Mark, MatchOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Mode / scores / timer
            Constraint::Length(1),  // Key help
        ])
        .split(area);

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_status(frame, chunks[2], app, now);
    draw_info(frame, chunks[3], app);

    let help = Paragraph::new("arrows: move   enter: place   r: restart   m: mode   d: difficulty   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 23, 11);

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
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, row);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
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
        if col > 0 {
            draw_vertical_separator(frame, cols[col * 2 - 1]);
        }
        draw_cell(frame, cols[col * 2], app, Coord::new(row, col).expect("row and col are 0-2"));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let session = app.session();
    let on_winning_line = session
        .winning_line()
        .is_some_and(|win| win.line.cells().contains(&coord));

    let (text, mut style) = match session.board().get(coord) {
        Cell::Empty => ("·", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if on_winning_line {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    }
    if coord == app.cursor() && !session.is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the middle line of the 3-line cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let session = app.session();
    let mut status = app.status_line();

    if app.view().show_timer && session.outcome() == MatchOutcome::InProgress {
        let remaining = session.remaining_time(now).as_secs();
        status.push_str(&format!("   (time left: {remaining}s)"));
    }

    let widget = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let mut parts = vec![format!("Mode: {}", session.mode())];

    if session.mode() == noughts_core::GameMode::HumanVsComputer {
        parts.push(format!("AI: {}", session.difficulty()));
    }
    if app.view().show_scores {
        let scores = session.scores();
        parts.push(format!(
            "X: {}  O: {}  Draws: {}",
            scores.x(),
            scores.o(),
            scores.draws()
        ));
    }

    let info = Paragraph::new(parts.join("   "))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(info, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
