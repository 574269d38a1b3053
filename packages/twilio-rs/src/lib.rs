//! Minimal Twilio REST API client.
//!
//! Covers what is needed to place an outbound voice call that speaks a
//! message: HTTP Basic authentication with the account sid and auth token,
//! the `Calls.json` create endpoint, and a small TwiML builder.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio::{CreateCallParams, TwilioOptions, TwilioService, VoiceResponse};
//!
//! let twilio = TwilioService::new(TwilioOptions {
//!     account_sid: "ACxxxxxxxx".into(),
//!     auth_token: "token".into(),
//! })?;
//!
//! let call = twilio
//!     .create_call(&CreateCallParams {
//!         to: "+15558675310".into(),
//!         from: "+15017122661".into(),
//!         twiml: VoiceResponse::new().say("Hello").to_xml(),
//!     })
//!     .await?;
//! println!("{} {}", call.sid, call.status);
//! ```

pub mod error;
pub mod models;
pub mod twiml;

pub use error::{Result, TwilioError};
pub use models::{Call, CreateCallParams, TwilioApiError};
pub use twiml::{escape_xml, VoiceResponse};

use reqwest::{header, Client};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

const USER_AGENT: &str = concat!("twilio-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
}

impl std::fmt::Debug for TwilioOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioOptions")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct TwilioService {
    options: TwilioOptions,
    http_client: Client,
    base_url: String,
}

impl TwilioService {
    /// Build a service with its own HTTP client.
    ///
    /// Fails with [`TwilioError::Client`] when the HTTP client cannot be
    /// initialised in this environment.
    pub fn new(options: TwilioOptions) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TwilioError::Client(e.to_string()))?;

        Ok(Self {
            options,
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn account_sid(&self) -> &str {
        &self.options.account_sid
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Place an outbound call.
    ///
    /// Returns the call resource as created; its status is usually `queued`.
    pub async fn create_call(&self, params: &CreateCallParams) -> Result<Call> {
        let url = format!(
            "{}/Accounts/{}/Calls.json",
            self.base_url, self.options.account_sid
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .header(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .form(params)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Request to Twilio failed");
                TwilioError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Twilio returned an error");
            return Err(api_error(status.as_u16(), &body));
        }

        let call: Call = response
            .json()
            .await
            .map_err(|e| TwilioError::Parse(format!("Failed to parse call response: {}", e)))?;

        debug!(sid = %call.sid, status = %call.status, "Twilio call created");
        Ok(call)
    }
}

fn api_error(status: u16, body: &str) -> TwilioError {
    match serde_json::from_str::<TwilioApiError>(body) {
        Ok(err) => TwilioError::Api {
            status: err.status.unwrap_or(status),
            code: err.code,
            message: err.message,
            more_info: err.more_info,
        },
        Err(_) => TwilioError::Api {
            status,
            code: None,
            message: body.to_string(),
            more_info: None,
        },
    }
}
