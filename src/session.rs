//! Core game state machine: question progression, prize banking,
//! lifelines, and the terminal outcome.

use crate::data;
use crate::models::{Lifeline, LifelineSet, PrizeLadder, Question};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All ten questions answered correctly.
    FullWin,
    /// Eliminated by a wrong answer.
    WrongAnswer,
    /// Walked away voluntarily, keeping banked winnings.
    Quit,
}

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Correct; the amount is banked and the next question is up.
    Banked(u32),
    /// Correct on the final question; the session is won.
    Won(u32),
    /// Wrong; the session ends with these winnings.
    Eliminated(u32),
}

/// A single play-through of the money ladder.
///
/// Owns the question bank, the prize ladder, and the lifeline set, and
/// tracks the per-question display state (options may be transformed by a
/// lifeline, which can also move the correct index).
pub struct GameSession {
    questions: Vec<Question>,
    ladder: PrizeLadder,
    lifelines: LifelineSet,
    index: usize,
    winnings: u32,
    in_the_running: bool,
    lifeline_played: bool,
    display_options: [String; 4],
    correct_display_index: usize,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Start a fresh session: built-in bank, standard ladder, all
    /// lifelines available, nothing banked.
    pub fn new() -> Self {
        Self::with_questions(data::question_bank())
    }

    /// Start a session over a specific question sequence.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let display_options = questions[0].options.clone();
        let correct_display_index = questions[0].correct_answer;

        Self {
            questions,
            ladder: PrizeLadder::standard(),
            lifelines: LifelineSet::new(),
            index: 0,
            winnings: 0,
            in_the_running: true,
            lifeline_played: false,
            display_options,
            correct_display_index,
            outcome: None,
        }
    }

    /// 1-based position of the current question.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.index]
    }

    /// Prize banked by answering the current question correctly.
    pub fn prize_at_stake(&self) -> u32 {
        self.ladder.prize(self.position())
    }

    pub fn winnings(&self) -> u32 {
        self.winnings
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Options as they should be shown for the current question, after any
    /// lifeline transform.
    pub fn display_options(&self) -> &[String; 4] {
        &self.display_options
    }

    /// Index of the correct answer within [`Self::display_options`].
    pub fn correct_display_index(&self) -> usize {
        self.correct_display_index
    }

    /// Lifelines that can still be offered.
    pub fn available_lifelines(&self) -> Vec<Lifeline> {
        self.lifelines.available()
    }

    /// Play a lifeline on the current question.
    ///
    /// At most one lifeline per question; a lifeline that was already
    /// consumed, or a second request on the same question, is refused and
    /// leaves both the lifeline set and the displayed options untouched.
    pub fn play_lifeline(&mut self, lifeline: Lifeline) -> bool {
        if self.outcome.is_some() || self.lifeline_played {
            return false;
        }
        if !self.lifelines.consume(lifeline) {
            return false;
        }

        self.lifeline_played = true;
        let (options, correct) = lifeline.apply(&self.display_options, self.correct_display_index);
        self.display_options = options;
        self.correct_display_index = correct;
        true
    }

    /// Answer the current question with a zero-based option index.
    ///
    /// Correct answers bank the current rung and advance (or win on the
    /// final question); a wrong answer drops winnings back to the previous
    /// rung, or to zero on question 1. Returns `None` once the session has
    /// already ended.
    pub fn answer(&mut self, choice: usize) -> Option<Turn> {
        if self.outcome.is_some() {
            return None;
        }

        if choice == self.correct_display_index {
            self.winnings = self.prize_at_stake();
            if self.index + 1 == self.questions.len() {
                self.outcome = Some(Outcome::FullWin);
                return Some(Turn::Won(self.winnings));
            }
            self.advance();
            Some(Turn::Banked(self.winnings))
        } else {
            self.in_the_running = false;
            self.winnings = if self.position() > 1 {
                self.ladder.prize(self.position() - 1)
            } else {
                0
            };
            self.outcome = Some(Outcome::WrongAnswer);
            Some(Turn::Eliminated(self.winnings))
        }
    }

    /// Walk away, ending the session with whatever is banked.
    pub fn quit(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(Outcome::Quit);
        }
    }

    /// True only for a full win that banked the top prize.
    pub fn is_top_tier_win(&self) -> bool {
        self.outcome == Some(Outcome::FullWin)
            && self.in_the_running
            && self.winnings == self.ladder.top()
    }

    fn advance(&mut self) {
        self.index += 1;
        self.lifeline_played = false;
        self.display_options = self.questions[self.index].options.clone();
        self.correct_display_index = self.questions[self.index].correct_answer;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
