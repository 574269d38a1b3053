//! Error types for the Twilio client.

use thiserror::Error;

/// Result type for Twilio client operations.
pub type Result<T> = std::result::Result<T, TwilioError>;

/// Twilio client errors.
#[derive(Debug, Error)]
pub enum TwilioError {
    /// The HTTP client could not be constructed (TLS backend, resolver)
    #[error("HTTP client unavailable: {0}")]
    Client(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Twilio rejected the request (bad credentials, invalid number, rate limit)
    #[error("Twilio API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
        more_info: Option<String>,
    },

    /// Parse error (unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
