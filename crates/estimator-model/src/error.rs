use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    /// The sleep model could not produce a value for the given inputs.
    #[error("sleep model could not evaluate: {reason}")]
    ModelEvaluation { reason: String },
    #[error("choice {index} is out of range (expected 0..{max})")]
    InvalidChoice { index: usize, max: usize },
    #[error("session already finished after {rounds} rounds")]
    SessionFinished { rounds: u32 },
    #[error("unknown temperature scale: {0}")]
    UnknownScale(String),
    #[error("unknown move: {0}")]
    UnknownMove(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EstimatorError {
    pub fn model(reason: impl Into<String>) -> Self {
        Self::ModelEvaluation {
            reason: reason.into(),
        }
    }

    /// Returns true for failures the caller should show as "could not compute".
    pub fn is_model_failure(&self) -> bool {
        matches!(self, Self::ModelEvaluation { .. })
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
