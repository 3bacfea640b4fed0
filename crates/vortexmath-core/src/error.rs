//! Error types for vortexmath

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("digit out of range: {0} (expected 0-9)")]
    DigitOutOfRange(i64),

    #[error("invalid gateway: {0} (expected 3, 6 or 9)")]
    InvalidGateway(u8),

    #[error("unknown challenge: {0} (expected 1-9)")]
    UnknownChallenge(u8),

    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
