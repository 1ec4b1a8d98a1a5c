use std::time::Duration;

use thiserror::Error;

/// Failures talking to the remote collector
#[derive(Error, Debug)]
pub enum CollectorError {
    /// Transport level failure (connect, TLS, DNS, client side timeout)
    #[error("HTTP request to collector failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Collector answered with a non-2xx status
    #[error("collector returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed collector response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("collector did not respond within {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
