//! Placing the call.
//!
//! [`VoiceCallClient`] is the narrow capability the initiator needs from a
//! telephony provider. [`TwilioVoiceClient`] implements it over the Twilio
//! REST client; tests substitute their own.

use async_trait::async_trait;
use tracing::{debug, info, warn};
use twilio::{CreateCallParams, TwilioError, TwilioOptions, TwilioService, VoiceResponse};

use crate::error::{CallError, Result};

/// Everything needed for one call. Built once per run, used once.
#[derive(Clone)]
pub struct CallRequest {
    pub account_sid: String,
    pub auth_token: String,
    pub from: String,
    pub to: String,
    pub message: String,
}

impl std::fmt::Debug for CallRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallRequest")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("message", &self.message)
            .finish()
    }
}

/// Provider-assigned identifier and initial status, both opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub sid: String,
    pub status: String,
}

impl std::fmt::Display for CallResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sid={} status={}", self.sid, self.status)
    }
}

#[async_trait]
pub trait VoiceCallClient: Send + Sync {
    /// Create a voice call that runs `markup` once answered.
    async fn create_call(&self, markup: &str, to: &str, from: &str) -> Result<CallResult>;
}

/// Wrapper around TwilioService that implements VoiceCallClient
pub struct TwilioVoiceClient(pub TwilioService);

impl TwilioVoiceClient {
    /// Build a Twilio-backed client for the request's credentials.
    pub fn for_request(request: &CallRequest, base_url: Option<&str>) -> Result<Self> {
        let service = TwilioService::new(TwilioOptions {
            account_sid: request.account_sid.clone(),
            auth_token: request.auth_token.clone(),
        })
        .map_err(client_error)?;

        let service = match base_url {
            Some(url) => service.with_base_url(url),
            None => service,
        };

        debug!(
            account_sid = %service.account_sid(),
            base_url = %service.base_url(),
            "Twilio client ready"
        );
        Ok(Self(service))
    }
}

/// A client that cannot be built means the telephony capability is missing.
fn client_error(e: TwilioError) -> CallError {
    match e {
        TwilioError::Client(reason) => CallError::DependencyMissing(reason),
        other => CallError::RemoteApi(other),
    }
}

#[async_trait]
impl VoiceCallClient for TwilioVoiceClient {
    async fn create_call(&self, markup: &str, to: &str, from: &str) -> Result<CallResult> {
        let call = self
            .0
            .create_call(&CreateCallParams {
                to: to.to_string(),
                from: from.to_string(),
                twiml: markup.to_string(),
            })
            .await?;

        Ok(CallResult {
            sid: call.sid,
            status: call.status,
        })
    }
}

/// Spoken-response document for `message`, with markup characters escaped.
pub fn build_markup(message: &str) -> String {
    VoiceResponse::new().say(message).to_xml()
}

/// Place exactly one call. Errors from the client are returned unchanged.
pub async fn initiate_call(
    client: &dyn VoiceCallClient,
    request: &CallRequest,
) -> Result<CallResult> {
    let markup = build_markup(&request.message);

    info!(to = %request.to, from = %request.from, "Placing call");

    let result = client
        .create_call(&markup, &request.to, &request.from)
        .await
        .inspect_err(|e| warn!(error = %e, to = %request.to, "Call was not initiated"))?;

    info!(sid = %result.sid, status = %result.status, "Call initiated");
    Ok(result)
}

/// The line printed on success.
pub fn format_result(result: &CallResult) -> String {
    format!("Call initiated. Result: {}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CallRequest {
        CallRequest {
            account_sid: "ACtest".into(),
            auth_token: "secret-token".into(),
            from: "+15017122661".into(),
            to: "+15558675310".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_markup_embeds_plain_message_verbatim() {
        assert_eq!(
            build_markup("Hello, this is an automated call."),
            "<Response><Say>Hello, this is an automated call.</Say></Response>"
        );
    }

    #[test]
    fn test_markup_escapes_special_characters() {
        assert_eq!(
            build_markup("R&D <Hangup/>"),
            "<Response><Say>R&amp;D &lt;Hangup/&gt;</Say></Response>"
        );
    }

    #[test]
    fn test_request_debug_hides_token() {
        let debug = format!("{:?}", request());
        assert!(debug.contains("ACtest"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_format_result_contains_sid_and_status() {
        let line = format_result(&CallResult {
            sid: "CA123".into(),
            status: "queued".into(),
        });

        assert!(line.contains("CA123"));
        assert!(line.contains("queued"));
    }

    #[test]
    fn test_client_build_failure_is_dependency_missing() {
        let err = client_error(TwilioError::Client("no TLS backend".into()));

        assert!(matches!(err, CallError::DependencyMissing(ref reason) if reason == "no TLS backend"));
        assert!(err.to_string().contains("Telephony client unavailable"));
    }

    #[test]
    fn test_other_client_errors_stay_remote() {
        let err = client_error(TwilioError::Network("connection refused".into()));

        assert!(matches!(err, CallError::RemoteApi(TwilioError::Network(_))));
    }

    #[test]
    fn test_twilio_client_honours_base_url() {
        let client =
            TwilioVoiceClient::for_request(&request(), Some("http://localhost:4010")).unwrap();

        assert_eq!(client.0.base_url(), "http://localhost:4010");
        assert_eq!(client.0.account_sid(), "ACtest");
    }
}
