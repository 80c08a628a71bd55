use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised by the dashboard host and its collaborators
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Data error: {0}")]
    Data(#[from] valdash_types::ValDashError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feed error: {0}")]
    Feed(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Data(err.into())
    }
}
