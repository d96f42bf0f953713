use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Active record limit reached ({limit})")]
    CapacityExceeded { limit: usize },

    #[error("Correlation key already registered: {0}")]
    DuplicateKey(String),

    #[error("Correlation record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Secure random source unavailable")]
    EntropyUnavailable,

    #[error("No usable address for the A record")]
    NoUsableAddress,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error: {0}")]
    TransportError(String),
}

impl From<crate::config::ConfigError> for DomainError {
    fn from(err: crate::config::ConfigError) -> Self {
        DomainError::ConfigError(err.to_string())
    }
}
