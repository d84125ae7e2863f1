//! Lifelines and their one-shot availability tracking.
//!
//! Each lifeline transforms how the current question's options are
//! displayed. Only `flip` moves the correct answer; the other two leave
//! every option at its original position.

/// Marker shown in place of an option removed by 50-50.
pub const REMOVED_MARKER: &str = "❌";

/// Share of the synthetic audience vote given to the correct option.
const AUDIENCE_CORRECT_SHARE: u32 = 60;
/// Largest share a single incorrect option can receive.
const AUDIENCE_STEP: u32 = 20;

/// A one-time-use aid that alters how a question is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifeline {
    FiftyFifty,
    Audience,
    Flip,
}

impl Lifeline {
    /// Display label, matching the on-air names.
    pub fn label(&self) -> &'static str {
        match self {
            Lifeline::FiftyFifty => "50-50",
            Lifeline::Audience => "audience",
            Lifeline::Flip => "flip",
        }
    }

    /// Apply this lifeline to a question's options.
    ///
    /// Takes the options as displayed and the index of the correct one;
    /// returns the transformed options and the correct index valid against
    /// them.
    pub fn apply(&self, options: &[String; 4], correct: usize) -> ([String; 4], usize) {
        match self {
            Lifeline::FiftyFifty => (fifty_fifty(options, correct), correct),
            Lifeline::Audience => (audience(options, correct), correct),
            Lifeline::Flip => flip(options, correct),
        }
    }
}

/// Blank out the first half (rounded down) of the incorrect options, in
/// original order. Positions never change, so the correct index is
/// untouched.
fn fifty_fifty(options: &[String; 4], correct: usize) -> [String; 4] {
    let incorrect: Vec<usize> = (0..options.len()).filter(|&i| i != correct).collect();
    let removed = &incorrect[..incorrect.len() / 2];

    let mut displayed = options.clone();
    for &i in removed {
        displayed[i] = REMOVED_MARKER.to_string();
    }
    displayed
}

/// Annotate every option with a synthetic audience percentage: 60% on the
/// correct option, then 20 points at a time to the incorrect options in
/// original order until the remaining 40 is spent. Always sums to 100.
fn audience(options: &[String; 4], correct: usize) -> [String; 4] {
    let percentages = audience_percentages(correct);
    let mut displayed = options.clone();
    for (option, percent) in displayed.iter_mut().zip(percentages) {
        *option = format!("{} ({}%)", option, percent);
    }
    displayed
}

fn audience_percentages(correct: usize) -> [u32; 4] {
    let mut percentages = [0; 4];
    percentages[correct] = AUDIENCE_CORRECT_SHARE;

    let mut remaining = 100 - AUDIENCE_CORRECT_SHARE;
    for (i, percent) in percentages.iter_mut().enumerate() {
        if i != correct {
            let share = remaining.min(AUDIENCE_STEP);
            *percent = share;
            remaining -= share;
        }
    }
    percentages
}

/// Reverse the option order; the correct index mirrors accordingly.
fn flip(options: &[String; 4], correct: usize) -> ([String; 4], usize) {
    let mut displayed = options.clone();
    displayed.reverse();
    (displayed, options.len() - 1 - correct)
}

/// Availability flags for the three lifelines. Consuming one is permanent
/// for the rest of the session.
#[derive(Debug, Clone)]
pub struct LifelineSet {
    fifty_fifty: bool,
    audience: bool,
    flip: bool,
}

impl LifelineSet {
    /// All three lifelines available.
    pub fn new() -> Self {
        Self {
            fifty_fifty: true,
            audience: true,
            flip: true,
        }
    }

    /// Lifelines still available, in a stable offer order.
    pub fn available(&self) -> Vec<Lifeline> {
        let mut available = Vec::with_capacity(3);
        if self.fifty_fifty {
            available.push(Lifeline::FiftyFifty);
        }
        if self.audience {
            available.push(Lifeline::Audience);
        }
        if self.flip {
            available.push(Lifeline::Flip);
        }
        available
    }

    pub fn is_available(&self, lifeline: Lifeline) -> bool {
        match lifeline {
            Lifeline::FiftyFifty => self.fifty_fifty,
            Lifeline::Audience => self.audience,
            Lifeline::Flip => self.flip,
        }
    }

    /// Mark a lifeline as used. Returns false if it was already consumed,
    /// leaving the set unchanged.
    pub fn consume(&mut self, lifeline: Lifeline) -> bool {
        let flag = match lifeline {
            Lifeline::FiftyFifty => &mut self.fifty_fifty,
            Lifeline::Audience => &mut self.audience,
            Lifeline::Flip => &mut self.flip,
        };
        let was_available = *flag;
        *flag = false;
        was_available
    }
}

impl Default for LifelineSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> [String; 4] {
        ["Red", "Yellow", "Green", "Orange"].map(String::from)
    }

    #[test]
    fn test_fifty_fifty_blanks_first_incorrect() {
        let (displayed, correct) = Lifeline::FiftyFifty.apply(&options(), 1);
        assert_eq!(correct, 1);
        assert_eq!(displayed[0], REMOVED_MARKER);
        assert_eq!(displayed[1], "Yellow");
        assert_eq!(displayed[2], "Green");
        assert_eq!(displayed[3], "Orange");
    }

    #[test]
    fn test_fifty_fifty_never_touches_correct() {
        for correct in 0..4 {
            let (displayed, adjusted) = Lifeline::FiftyFifty.apply(&options(), correct);
            assert_eq!(adjusted, correct);
            assert_ne!(displayed[correct], REMOVED_MARKER);
            let blanked = displayed.iter().filter(|o| *o == REMOVED_MARKER).count();
            assert_eq!(blanked, 1);
        }
    }

    #[test]
    fn test_audience_percentages_sum_to_100() {
        for correct in 0..4 {
            let percentages = audience_percentages(correct);
            assert_eq!(percentages[correct], 60);
            assert_eq!(percentages.iter().sum::<u32>(), 100);
        }
    }

    #[test]
    fn test_audience_distributes_in_original_order() {
        // Correct on index 1: indices 0 and 2 get 20 each, index 3 gets 0.
        assert_eq!(audience_percentages(1), [20, 60, 20, 0]);
        assert_eq!(audience_percentages(3), [20, 20, 0, 60]);
    }

    #[test]
    fn test_audience_annotates_every_option() {
        let (displayed, correct) = Lifeline::Audience.apply(&options(), 0);
        assert_eq!(correct, 0);
        assert_eq!(displayed[0], "Red (60%)");
        assert_eq!(displayed[1], "Yellow (20%)");
        assert_eq!(displayed[2], "Green (20%)");
        assert_eq!(displayed[3], "Orange (0%)");
    }

    #[test]
    fn test_flip_reverses_and_mirrors_index() {
        let (displayed, correct) = Lifeline::Flip.apply(&options(), 1);
        assert_eq!(correct, 2);
        assert_eq!(displayed[0], "Orange");
        assert_eq!(displayed[3], "Red");
        assert_eq!(displayed[correct], "Yellow");
    }

    #[test]
    fn test_flip_is_an_involution() {
        let (flipped, mid) = Lifeline::Flip.apply(&options(), 3);
        let (restored, correct) = Lifeline::Flip.apply(&flipped, mid);
        assert_eq!(restored, options());
        assert_eq!(correct, 3);
    }

    #[test]
    fn test_lifeline_set_consume_is_one_shot() {
        let mut set = LifelineSet::new();
        assert_eq!(set.available().len(), 3);

        assert!(set.consume(Lifeline::Audience));
        assert!(!set.is_available(Lifeline::Audience));
        assert_eq!(set.available(), vec![Lifeline::FiftyFifty, Lifeline::Flip]);

        // Second consume fails and changes nothing else.
        assert!(!set.consume(Lifeline::Audience));
        assert_eq!(set.available(), vec![Lifeline::FiftyFifty, Lifeline::Flip]);
    }
}
