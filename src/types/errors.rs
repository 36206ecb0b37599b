use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum TriageError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("Invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("Invalid collection: {0}")]
    InvalidCollection(String),
}

impl From<std::io::Error> for TriageError {
    fn from(error: std::io::Error) -> Self {
        TriageError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for TriageError {
    fn from(error: serde_json::Error) -> Self {
        TriageError::Parse(error.to_string())
    }
}

impl From<reqwest::Error> for TriageError {
    fn from(error: reqwest::Error) -> Self {
        TriageError::Http(error.to_string())
    }
}

impl Serialize for TriageError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type TriageResult<T> = Result<T, TriageError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
