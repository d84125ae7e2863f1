//! # crorepati
//!
//! A terminal money-ladder trivia game: ten questions, a prize ladder from
//! ₹1,000 to ₹10,000, and three one-time lifelines (50-50, audience, flip).
//! One wrong answer ends the game; the player can walk away at any point
//! and keep what they have banked.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crorepati::Game;
//!
//! fn main() -> std::io::Result<()> {
//!     Game::new().run()
//! }
//! ```

mod app;
mod data;
mod input;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, QuizPhase};
pub use input::{AnswerInput, lifeline_for_digit};
pub use models::{AppState, Lifeline, LifelineSet, PrizeLadder, Question, format_rupees};
pub use session::{GameSession, Outcome, Turn};

/// A full game that can be run in the terminal.
pub struct Game {
    app: App,
}

impl Game {
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    /// Run the game in the terminal.
    ///
    /// Takes over the terminal, drives the session to its outcome, and
    /// returns when the player exits from the result screen. The process
    /// result does not depend on how the game ended.
    pub fn run(mut self) -> io::Result<()> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_game();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match app.phase() {
        QuizPhase::LifelineOffer => match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.walk_away(),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                app.skip_lifeline()
            }
            // Digits pick from the offer list; any other character is an
            // invalid selection and degrades to "no lifeline".
            KeyCode::Char(c) => app.choose_lifeline(c),
            _ => {}
        },
        QuizPhase::Answering => {
            if let KeyCode::Char(c) = key {
                app.answer(AnswerInput::from_key(c));
            }
        }
        QuizPhase::Banked { .. } => match key {
            KeyCode::Enter => app.continue_to_next(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.walk_away(),
            _ => {}
        },
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_keys_drive_a_question() {
        let mut app = App::new();
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.phase(), QuizPhase::LifelineOffer);

        // Decline the lifeline, then answer question 1 correctly ('b').
        assert!(!handle_input(&mut app, KeyCode::Char('n')));
        assert!(!handle_input(&mut app, KeyCode::Char('b')));
        assert_eq!(app.phase(), QuizPhase::Banked { amount: 1000 });
    }

    #[test]
    fn test_stray_keys_change_nothing() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Char('n'));

        for key in [KeyCode::Char('z'), KeyCode::Tab, KeyCode::Char('5')] {
            assert!(!handle_input(&mut app, key));
            assert_eq!(app.phase(), QuizPhase::Answering);
            assert_eq!(app.session().position(), 1);
        }
    }

    #[test]
    fn test_quit_key_walks_away_with_winnings() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Char('n'));
        handle_input(&mut app, KeyCode::Char('b'));
        handle_input(&mut app, KeyCode::Enter);

        handle_input(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().outcome(), Some(Outcome::Quit));
        assert_eq!(app.session().winnings(), 1000);

        // From the result screen, q exits the event loop.
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }
}
