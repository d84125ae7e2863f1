//! The money ladder: one prize amount per question position.

/// Number of rungs on the ladder, equal to the number of questions.
pub const LADDER_LEN: usize = 10;

const RUPEES_PER_RUNG: u32 = 1000;

/// Fixed mapping from question position (1..=10) to the prize banked by
/// answering that question correctly. Strictly increasing by construction.
#[derive(Debug, Clone)]
pub struct PrizeLadder {
    amounts: [u32; LADDER_LEN],
}

impl PrizeLadder {
    /// The standard ladder: position `p` is worth `1000 * p` rupees.
    pub fn standard() -> Self {
        let mut amounts = [0; LADDER_LEN];
        for (i, amount) in amounts.iter_mut().enumerate() {
            *amount = RUPEES_PER_RUNG * (i as u32 + 1);
        }
        Self { amounts }
    }

    /// Prize for a 1-based question position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `1..=10`.
    pub fn prize(&self, position: usize) -> u32 {
        self.amounts[position - 1]
    }

    /// The top prize, won by clearing every question.
    pub fn top(&self) -> u32 {
        self.amounts[LADDER_LEN - 1]
    }
}

impl Default for PrizeLadder {
    fn default() -> Self {
        Self::standard()
    }
}

/// Format an amount as rupees with thousands separators, e.g. `₹10,000`.
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{}", grouped)
}
