use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: usize,
}
