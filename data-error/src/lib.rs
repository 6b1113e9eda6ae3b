use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaratError>;

#[derive(Error, Debug)]
pub enum CaratError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Parsing error")]
    Parse,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Failure inside one of the batch passes,
    /// carrying the pass label for diagnostics.
    #[error("Batch error in {0}: {1}")]
    Batch(String, String),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for CaratError {
    fn from(message: &str) -> Self {
        CaratError::Other(message.to_owned())
    }
}

impl From<String> for CaratError {
    fn from(message: String) -> Self {
        CaratError::Other(message)
    }
}
