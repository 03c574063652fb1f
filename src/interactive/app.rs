//! TUI application state and event loop

use super::board::BoardView;
use super::keyboard;
use super::rendering::screen_areas;
use crate::game::{GameConfig, InputEvent, RoundController, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub controller: RoundController<BoardView>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Map a physical key to an input event
///
/// Enter confirms, Backspace deletes, ASCII letters are uppercased.
/// Everything else maps to `None`.
#[must_use]
pub fn input_event_for_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Backspace => Some(InputEvent::Delete),
        KeyCode::Char(c) => InputEvent::from_char(c),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let board = BoardView::new(config.max_attempts(), config.word_length());
        let stats = Statistics::new(config.max_attempts());

        Self {
            controller: RoundController::new(config, board),
            stats,
            should_quit: false,
        }
    }

    /// Apply a normalized input event and record finished rounds
    pub fn handle_input(&mut self, event: InputEvent) {
        match self.controller.dispatch(event) {
            Ok(outcome) if outcome.ends_round() => {
                if let Some(result) = self.controller.session().result() {
                    self.stats.record(result);
                }
            }
            Ok(_) => {}
            Err(e) => debug!(error = %e, "submit rejected"),
        }
    }

    /// Handle a key press from the physical keyboard
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                // Shortcuts are not guesses
            }
            code => {
                if let Some(event) = input_event_for_key(code) {
                    self.handle_input(event);
                }
            }
        }
    }

    /// Handle a mouse event; left clicks press on-screen keys
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let areas = screen_areas(screen, self.controller.session().max_attempts());
        if let Some(key) = keyboard::key_at(areas.keyboard, mouse.column, mouse.row) {
            self.handle_input(key.event());
        }
    }
}

/// Run the TUI application
///
/// Returns the application so statistics can be shown after the terminal
/// is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(app)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use crate::game::RoundState;
    use crate::interactive::keyboard::KeyCap;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(
            input_event_for_key(KeyCode::Enter),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            input_event_for_key(KeyCode::Backspace),
            Some(InputEvent::Delete)
        );
        assert_eq!(
            input_event_for_key(KeyCode::Char('q')),
            Some(InputEvent::Letter('Q'))
        );
        assert_eq!(input_event_for_key(KeyCode::Char('7')), None);
        assert_eq!(input_event_for_key(KeyCode::Tab), None);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = App::new(GameConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(GameConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.controller.session().current_col(), 0);
    }

    #[test]
    fn win_is_recorded_once() {
        let mut app = App::new(GameConfig::default());
        type_word(&mut app, "trace");
        type_word(&mut app, "react");

        assert_eq!(app.controller.session().state(), RoundState::Terminal);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        // Extra input while terminal does not record again
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.stats.total_games, 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.session().state(), RoundState::Active);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn loss_is_recorded() {
        let mut app = App::new(GameConfig::default());
        for _ in 0..6 {
            type_word(&mut app, "build");
        }
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(
            app.controller.presenter().message(),
            "Game over! The word was: REACT"
        );
    }

    #[test]
    fn clicks_press_on_screen_keys() {
        let mut app = App::new(GameConfig::default());
        let screen = Rect::new(0, 0, 80, 40);
        let areas = screen_areas(screen, 6);

        let click = |key: KeyCap| {
            let (_, rect) = keyboard::layout_keys(areas.keyboard)
                .into_iter()
                .find(|(k, _)| *k == key)
                .unwrap();
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: rect.x + 1,
                row: rect.y + 1,
                modifiers: KeyModifiers::NONE,
            }
        };

        for ch in "REACT".chars() {
            app.handle_mouse(click(KeyCap::Letter(ch)), screen);
        }
        assert_eq!(app.controller.session().current_col(), 5);

        app.handle_mouse(click(KeyCap::Backspace), screen);
        assert_eq!(app.controller.session().current_col(), 4);

        app.handle_mouse(click(KeyCap::Letter('T')), screen);
        app.handle_mouse(click(KeyCap::Enter), screen);
        assert_eq!(
            app.controller.presenter().key_status('R'),
            Some(Classification::Exact)
        );
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn non_left_clicks_are_ignored() {
        let mut app = App::new(GameConfig::default());
        let screen = Rect::new(0, 0, 80, 40);
        let areas = screen_areas(screen, 6);
        let (_, rect) = keyboard::layout_keys(areas.keyboard)[0];

        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Right),
                column: rect.x + 1,
                row: rect.y + 1,
                modifiers: KeyModifiers::NONE,
            },
            screen,
        );
        assert_eq!(app.controller.session().current_col(), 0);
    }
}
