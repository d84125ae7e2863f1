//! Data model for the game: questions, the prize ladder, and lifelines.

mod ladder;
mod lifeline;
mod question;

pub use ladder::{PrizeLadder, format_rupees};
pub use lifeline::{Lifeline, LifelineSet, REMOVED_MARKER};
pub use question::Question;

/// Top-level screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
