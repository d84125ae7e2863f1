use crate::models::Question;

/// The fixed question bank, compiled into the binary.
const QUESTIONS_JSON: &str = include_str!("questions.json");

/// Number of questions in a session.
pub const QUESTION_COUNT: usize = 10;

/// Parse the built-in question bank.
///
/// The bank is a compile-time constant, so any failure here is a defect in
/// the bundled data and panics with a message naming the problem.
pub fn question_bank() -> Vec<Question> {
    let questions: Vec<Question> = serde_json::from_str(QUESTIONS_JSON)
        .unwrap_or_else(|err| panic!("Failed to parse built-in question bank: {}", err));

    if questions.len() != QUESTION_COUNT {
        panic!(
            "Built-in question bank must contain {} questions, found {}",
            QUESTION_COUNT,
            questions.len()
        );
    }

    for (index, question) in questions.iter().enumerate() {
        if question.correct_answer >= question.options.len() {
            panic!(
                "Question {} has correct_answer {} out of range",
                index + 1,
                question.correct_answer
            );
        }
    }

    questions
}
