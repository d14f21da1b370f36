//! Application state and key dispatch.

use crossterm::event::KeyCode;
use noughts_core::{Coord, GameMode, MatchConfig, MatchOutcome, MatchSession};
use std::time::Instant;
use tracing::debug;

/// Presentation flags.
///
/// The timer and score displays are optional; turning the timer off
/// also stops expiry ticks, so turns never auto-pass.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Render the turn timer and drive expiry.
    pub show_timer: bool,
    /// Render the session score tally.
    pub show_scores: bool,
}

/// Main application state: one owned session plus the cursor.
pub struct App {
    session: MatchSession,
    cursor: Coord,
    view: ViewOptions,
    quit: bool,
}

impl App {
    /// Creates the application with a fresh session.
    pub fn new(config: MatchConfig, view: ViewOptions, now: Instant) -> Self {
        Self {
            session: MatchSession::new(config, now),
            cursor: Coord::CENTER,
            view,
            quit: false,
        }
    }

    /// The owned session, for rendering.
    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    /// The board cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// The presentation flags.
    pub fn view(&self) -> ViewOptions {
        self.view
    }

    /// Whether the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = crate::input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Stale input (occupied cell, finished match) is dropped.
                if let Err(err) =
                    self.session
                        .attempt_move(self.cursor.row(), self.cursor.col(), now)
                {
                    debug!(%err, "input ignored");
                }
            }
            KeyCode::Char('r') => {
                if self.session.is_over() {
                    self.session.restart(now);
                }
            }
            KeyCode::Char('m') => self.session.toggle_mode(now),
            KeyCode::Char('d') => {
                if self.session.mode() == GameMode::HumanVsComputer {
                    self.session.toggle_difficulty();
                }
            }
            _ => {}
        }
    }

    /// Advances time-driven state.
    pub fn tick(&mut self, now: Instant) {
        if self.view.show_timer {
            self.session.tick(now);
        }
    }

    /// The one-line status shown under the board.
    pub fn status_line(&self) -> String {
        match self.session.outcome() {
            MatchOutcome::Won(win) => {
                format!("Player {} wins! Press 'r' to play again.", win.mark)
            }
            MatchOutcome::Draw => "It's a draw! Press 'r' to play again.".to_string(),
            MatchOutcome::InProgress => format!("Player {}'s turn", self.session.to_move()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Cell, Mark};

    fn app() -> App {
        App::new(
            MatchConfig::default(),
            ViewOptions {
                show_timer: true,
                show_scores: true,
            },
            Instant::now(),
        )
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Enter, now);
        assert_eq!(app.session().board().get(Coord::CENTER), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_occupied_cell_input_is_dropped() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Enter, now);
        app.handle_key(KeyCode::Enter, now);
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.session().to_move(), Mark::O);
    }

    #[test]
    fn test_restart_key_only_works_after_match_end() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Enter, now);
        app.handle_key(KeyCode::Char('r'), now);
        // Match still running: the board keeps its mark.
        assert_eq!(app.session().history().len(), 1);
    }

    #[test]
    fn test_difficulty_key_ignored_in_pvp() {
        let mut app = app();
        let before = app.session().difficulty();
        app.handle_key(KeyCode::Char('d'), Instant::now());
        assert_eq!(app.session().difficulty(), before);
    }

    #[test]
    fn test_mode_key_toggles_and_restarts() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Enter, now);
        app.handle_key(KeyCode::Char('m'), now);
        assert_eq!(app.session().mode(), GameMode::HumanVsComputer);
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_timer_off_never_auto_passes() {
        let mut app = App::new(
            MatchConfig::default(),
            ViewOptions {
                show_timer: false,
                show_scores: true,
            },
            Instant::now(),
        );
        app.tick(Instant::now() + std::time::Duration::from_secs(60));
        assert_eq!(app.session().to_move(), Mark::X);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'), Instant::now());
        assert!(app.should_quit());
    }
}
