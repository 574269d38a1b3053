use thiserror::Error;
use twilio::TwilioError;

pub type Result<T> = std::result::Result<T, CallError>;

#[derive(Debug, Error)]
pub enum CallError {
    /// Required credentials or parameters missing after merging flags and env
    #[error("{0}")]
    Configuration(String),

    /// The telephony client could not be constructed in this environment
    #[error("Telephony client unavailable: {0}")]
    DependencyMissing(String),

    /// Twilio rejected or failed the request; passed through untouched
    #[error(transparent)]
    RemoteApi(#[from] TwilioError),
}
