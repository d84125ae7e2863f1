//! Parsers for player key presses.
//!
//! All free-form input is resolved into tagged values here, at the I/O
//! boundary, so the game logic never branches on raw characters.

use crate::models::Lifeline;

/// A key press on the answering screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerInput {
    A,
    B,
    C,
    D,
    /// Walk away with the current winnings.
    Quit,
    /// Anything else; ignored without penalty.
    Invalid,
}

impl AnswerInput {
    /// Map a key to an answer. Letters are case-insensitive; `q` quits.
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'a' => AnswerInput::A,
            'b' => AnswerInput::B,
            'c' => AnswerInput::C,
            'd' => AnswerInput::D,
            'q' => AnswerInput::Quit,
            _ => AnswerInput::Invalid,
        }
    }

    /// Zero-based option index for a letter answer, if this is one.
    pub fn option_index(&self) -> Option<usize> {
        match self {
            AnswerInput::A => Some(0),
            AnswerInput::B => Some(1),
            AnswerInput::C => Some(2),
            AnswerInput::D => Some(3),
            AnswerInput::Quit | AnswerInput::Invalid => None,
        }
    }
}

/// Resolve a digit key against the list of currently available lifelines,
/// numbered from 1. Anything out of range resolves to no lifeline.
pub fn lifeline_for_digit(key: char, available: &[Lifeline]) -> Option<Lifeline> {
    key.to_digit(10)
        .and_then(|n| (n as usize).checked_sub(1))
        .and_then(|index| available.get(index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_letters_map_to_indices() {
        assert_eq!(AnswerInput::from_key('a').option_index(), Some(0));
        assert_eq!(AnswerInput::from_key('B').option_index(), Some(1));
        assert_eq!(AnswerInput::from_key('c').option_index(), Some(2));
        assert_eq!(AnswerInput::from_key('D').option_index(), Some(3));
    }

    #[test]
    fn test_quit_and_invalid_keys() {
        assert_eq!(AnswerInput::from_key('q'), AnswerInput::Quit);
        assert_eq!(AnswerInput::from_key('Q'), AnswerInput::Quit);
        assert_eq!(AnswerInput::from_key('e'), AnswerInput::Invalid);
        assert_eq!(AnswerInput::from_key('1'), AnswerInput::Invalid);
        assert_eq!(AnswerInput::from_key(' '), AnswerInput::Invalid);
        assert_eq!(AnswerInput::Quit.option_index(), None);
    }

    #[test]
    fn test_lifeline_digit_selection() {
        let available = vec![Lifeline::FiftyFifty, Lifeline::Flip];

        assert_eq!(
            lifeline_for_digit('1', &available),
            Some(Lifeline::FiftyFifty)
        );
        assert_eq!(lifeline_for_digit('2', &available), Some(Lifeline::Flip));

        // Out of range, zero, or non-numeric all degrade to no lifeline.
        assert_eq!(lifeline_for_digit('9', &available), None);
        assert_eq!(lifeline_for_digit('3', &available), None);
        assert_eq!(lifeline_for_digit('0', &available), None);
        assert_eq!(lifeline_for_digit('x', &available), None);
        assert_eq!(lifeline_for_digit('1', &[]), None);
    }
}
