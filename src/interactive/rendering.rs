//! TUI rendering with ratatui
//!
//! Letter grid, on-screen keyboard, message line and status bar.

use super::app::App;
use super::board::Tile;
use super::keyboard::{self, KEYBOARD_HEIGHT, KeyCap};
use crate::core::Classification;
use crate::game::RoundResult;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::ops::Range;

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;

/// Screen regions, shared by drawing and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub grid: Rect,
    pub message: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the screen for a grid with `grid_rows` attempts
#[must_use]
pub fn screen_areas(area: Rect, grid_rows: usize) -> ScreenAreas {
    // Header, message, keyboard and status bar always keep their height
    let fixed = 3 + 3 + KEYBOARD_HEIGHT + 1;
    let grid_height = u16::try_from(grid_rows)
        .unwrap_or(u16::MAX)
        .saturating_mul(TILE_HEIGHT)
        .min(area.height.saturating_sub(fixed));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(grid_height),        // Letter grid
            Constraint::Length(3),               // Message
            Constraint::Length(KEYBOARD_HEIGHT), // On-screen keyboard
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        grid: chunks[1],
        message: chunks[2],
        keyboard: chunks[3],
        status: chunks[4],
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board = app.controller.presenter();
    let areas = screen_areas(f.area(), board.rows());

    render_header(f, areas.header);
    render_grid(f, app, areas.grid);
    render_message(f, app, areas.message);
    render_keyboard(f, app, areas.keyboard);
    render_status(f, app, areas.status);
}

fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Exact => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::DarkGray,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

/// Window of `capacity` consecutive indices out of `total` that contains `focus`
///
/// The window starts at 0 and only scrolls once `focus` would fall past its end.
#[must_use]
pub fn visible_window(total: usize, focus: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || total == 0 {
        return 0..0;
    }
    let len = capacity.min(total);
    let focus = focus.min(total - 1);
    let start = (focus + 1).saturating_sub(len);
    start..start + len
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let board = app.controller.presenter();
    let session = app.controller.session();

    let row_capacity = usize::from(area.height / TILE_HEIGHT);
    let col_capacity = usize::from(area.width.saturating_add(TILE_GAP) / (TILE_WIDTH + TILE_GAP));
    let rows = visible_window(board.rows(), session.current_row(), row_capacity);
    let cols = visible_window(board.cols(), session.current_col(), col_capacity);

    // Both windows fit inside `area`, so their lengths fit in u16
    let shown = cols.len() as u16;
    let grid_width = shown * TILE_WIDTH + shown.saturating_sub(1) * TILE_GAP;
    let x0 = area.x + area.width.saturating_sub(grid_width) / 2;

    for (i, row) in rows.enumerate() {
        let y = area.y + i as u16 * TILE_HEIGHT;
        for (j, col) in cols.clone().enumerate() {
            let x = x0 + j as u16 * (TILE_WIDTH + TILE_GAP);
            render_tile(
                f,
                board.tile(row, col),
                Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT),
            );
        }
    }
}

fn render_tile(f: &mut Frame, tile: Tile, area: Rect) {
    let letter = tile.letter.map(String::from).unwrap_or_default();

    let (style, border) = match (tile.classification, tile.letter) {
        (Some(c), _) => {
            let color = classification_color(c);
            (
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(color).bg(color),
            )
        }
        (None, Some(_)) => (
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        (None, None) => (Style::default(), Style::default().fg(Color::DarkGray)),
    };

    let paragraph = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.controller.session().result() {
        Some(RoundResult::Won { .. }) => Color::Green,
        Some(RoundResult::Lost) => Color::Red,
        None => Color::Yellow,
    };

    let message = Paragraph::new(app.controller.presenter().message())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let board = app.controller.presenter();

    for (key, rect) in keyboard::layout_keys(area) {
        let status = match key {
            KeyCap::Letter(c) => board.key_status(c),
            KeyCap::Enter | KeyCap::Backspace => None,
        };

        let style = status.map_or_else(
            || Style::default().fg(Color::White),
            |c| {
                Style::default()
                    .bg(classification_color(c))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            },
        );

        let paragraph = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(paragraph, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(area);

    let session = app.controller.session();
    let attempt_text = if session.is_terminal() {
        "Round over".to_string()
    } else {
        format!(
            "Attempt {}/{}",
            session.current_row() + 1,
            session.max_attempts()
        )
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if session.is_terminal() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | ⌫: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
