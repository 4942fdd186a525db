//! Error types for the marketplace client.

/// Marketplace client error type.
///
/// Every variant carries the original failure detail unmodified.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Endpoint unreachable or transport-level failure.
    #[error("connection error: {0}")]
    Connection(String),
    /// Query rejected by the contract, not found, or malformed response.
    #[error("query error: {0}")]
    Query(String),
    /// Execution rejected by the contract or failed on submission.
    #[error("execution error: {0}")]
    Execution(String),
    /// Outbound message could not be serialized.
    #[error("encoding error: {0}")]
    Encoding(String),
    /// Configuration missing or invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// The detail message as reported by its source.
    pub fn detail(&self) -> &str {
        match self {
            Error::Connection(msg)
            | Error::Query(msg)
            | Error::Execution(msg)
            | Error::Encoding(msg)
            | Error::Config(msg) => msg,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
