use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValDashError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid participation rate: {0}")]
    InvalidRate(String),

    #[error("Unknown proposal outcome code: {0}")]
    UnknownOutcome(i64),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ValDashError {
    fn from(err: serde_json::Error) -> Self {
        ValDashError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ValDashError>;

/// Why a chart has nothing to show.
///
/// These never cross component boundaries as failures; the host stores
/// them as chart-level flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataUnavailable {
    #[error("no data returned by the feed")]
    NoData,

    #[error("insufficient data: received {received} points, need at least {required}")]
    InsufficientData { received: usize, required: usize },
}
