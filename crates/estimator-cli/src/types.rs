use estimator_model::{QuizAnswer, RoundOutcome, TemperatureScale};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub from: TemperatureScale,
    pub to: TemperatureScale,
    pub converted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub seed: u64,
    pub rounds: Vec<RoundOutcome>,
    pub score: i32,
    pub finished: bool,
    /// Moves given after the session ended.
    pub ignored_moves: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionReport {
    pub choices: Vec<String>,
    #[serde(flatten)]
    pub answer: QuizAnswer,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub seed: u64,
    pub questions: Vec<QuestionReport>,
    pub score: u32,
    pub asked: u32,
}
