use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdalineError>;

#[derive(Debug, Error)]
pub enum AdalineError {
    #[error("model is not fitted")]
    NotFitted,
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },
    #[error("dataset is empty: {0}")]
    EmptyDataset(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("plot error: {0}")]
    Plot(String),
}

impl AdalineError {
    pub fn shape(expected: impl ToString, found: impl ToString) -> Self {
        AdalineError::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn plot(error: impl ToString) -> Self {
        AdalineError::Plot(error.to_string())
    }

    pub fn empty(message: impl Into<String>) -> Self {
        AdalineError::EmptyDataset(message.into())
    }
}
