use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiotError {
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON parsing error: {0}")]
    Decode(String),

    #[error("HTTP error: {0}")]
    Transport(String),

    #[error("HTTP status {status} {reason}")]
    Http {
        status: u16,
        reason: String,
        body: serde_json::Value,
    },
}

pub type Result<T> = std::result::Result<T, RiotError>;
