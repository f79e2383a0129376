use thiserror::Error;

/// Errors raised while configuring the fingerprinting pipeline.
///
/// Fingerprinting itself never fails; only the outer surfaces (loading a
/// configuration file, installing a log subscriber) return these.
#[derive(Error, Debug)]
pub enum RateKeyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header name in ip_headers: {name:?}")]
    InvalidHeaderName { name: String },

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, RateKeyError>;
