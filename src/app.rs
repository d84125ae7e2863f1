use crate::input::{self, AnswerInput};
use crate::models::AppState;
use crate::session::{GameSession, Turn};

/// Where the quiz screen is within a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Offering the remaining lifelines; a digit plays one, anything else
    /// declines. Skipped entirely once all lifelines are spent.
    LifelineOffer,
    /// Waiting for an answer letter (or `q` to walk away).
    Answering,
    /// A correct non-final answer was just banked; waiting for an
    /// acknowledgment before the next question.
    Banked { amount: u32 },
}

pub struct App {
    pub state: AppState,
    session: GameSession,
    phase: QuizPhase,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Welcome,
            session: GameSession::new(),
            phase: QuizPhase::Answering,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn start_game(&mut self) {
        self.state = AppState::Quiz;
        self.phase = self.opening_phase();
    }

    /// Resolve the lifeline offer with a digit key. An invalid or
    /// out-of-range digit degrades to "no lifeline"; either way the offer
    /// is over and the question moves to answering.
    pub fn choose_lifeline(&mut self, key: char) {
        if self.phase != QuizPhase::LifelineOffer {
            return;
        }
        let available = self.session.available_lifelines();
        if let Some(lifeline) = input::lifeline_for_digit(key, &available) {
            self.session.play_lifeline(lifeline);
        }
        self.phase = QuizPhase::Answering;
    }

    /// Decline the lifeline offer outright.
    pub fn skip_lifeline(&mut self) {
        if self.phase == QuizPhase::LifelineOffer {
            self.phase = QuizPhase::Answering;
        }
    }

    /// Submit an answer on the answering phase. Invalid input is ignored
    /// and the phase keeps waiting.
    pub fn answer(&mut self, input: AnswerInput) {
        if self.phase != QuizPhase::Answering {
            return;
        }
        if input == AnswerInput::Quit {
            self.walk_away();
            return;
        }
        let Some(choice) = input.option_index() else {
            return;
        };

        match self.session.answer(choice) {
            Some(Turn::Banked(amount)) => self.phase = QuizPhase::Banked { amount },
            Some(Turn::Won(_)) | Some(Turn::Eliminated(_)) => self.state = AppState::Result,
            None => {}
        }
    }

    /// Acknowledge a banked answer and move on to the next question.
    pub fn continue_to_next(&mut self) {
        if let QuizPhase::Banked { .. } = self.phase {
            self.phase = self.opening_phase();
        }
    }

    /// Walk away with the current winnings.
    pub fn walk_away(&mut self) {
        self.session.quit();
        self.state = AppState::Result;
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.session = GameSession::new();
        self.phase = QuizPhase::Answering;
    }

    fn opening_phase(&self) -> QuizPhase {
        if self.session.available_lifelines().is_empty() {
            QuizPhase::Answering
        } else {
            QuizPhase::LifelineOffer
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
