use serde::{Deserialize, Serialize};

/// Form body for `POST /Accounts/{sid}/Calls.json`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCallParams {
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Twiml")]
    pub twiml: String,
}

/// A call resource as returned by the Calls endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Call {
    pub sid: String,
    pub status: String,
    pub to: Option<String>,
    pub from: Option<String>,
    pub account_sid: Option<String>,
    pub direction: Option<String>,
    pub date_created: Option<String>,
    pub uri: Option<String>,
}

/// Error body Twilio sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioApiError {
    pub code: Option<u32>,
    pub message: String,
    pub more_info: Option<String>,
    pub status: Option<u16>,
}
