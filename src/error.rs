use crate::exit_code;
use thiserror::Error;

/// Fault raised inside the summation pass; surfaced as the `source()` of
/// `ScoreError::ScoringFailure` rather than in its message.
#[derive(Error, Debug)]
pub enum ScoreFault {
    #[error("points total overflowed while adding {category}")]
    TotalOverflow { category: String },
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("failed to calculate lead score")]
    ScoringFailure(#[source] ScoreFault),

    #[error("criteria parse error: {0}")]
    CriteriaParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Record-level rejections map to BLOCKING, environment problems to
    /// RUNTIME_FAILURE.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScoreError::InvalidCategory(_)
            | ScoreError::ScoringFailure(_)
            | ScoreError::Json(_) => exit_code::BLOCKING,
            ScoreError::CriteriaParse(_) | ScoreError::Io(_) => exit_code::RUNTIME_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
