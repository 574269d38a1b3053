// Shared test fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use make_call::{CallRequest, CallResult, Result, VoiceCallClient};
use std::sync::{Arc, Mutex};
use twilio::TwilioError;

/// Arguments captured from a create_call invocation
#[derive(Debug, Clone)]
pub struct CreateCallArgs {
    pub markup: String,
    pub to: String,
    pub from: String,
}

enum Outcome {
    Created(CallResult),
    Failed(TwilioError),
}

pub struct MockVoiceClient {
    outcomes: Arc<Mutex<Vec<Outcome>>>,
    calls: Arc<Mutex<Vec<CreateCallArgs>>>,
}

impl MockVoiceClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_result(self, sid: &str, status: &str) -> Self {
        self.outcomes.lock().unwrap().push(Outcome::Created(CallResult {
            sid: sid.to_string(),
            status: status.to_string(),
        }));
        self
    }

    pub fn with_error(self, error: TwilioError) -> Self {
        self.outcomes.lock().unwrap().push(Outcome::Failed(error));
        self
    }

    /// Get all create_call invocations in order
    pub fn calls(&self) -> Vec<CreateCallArgs> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoiceCallClient for MockVoiceClient {
    async fn create_call(&self, markup: &str, to: &str, from: &str) -> Result<CallResult> {
        self.calls.lock().unwrap().push(CreateCallArgs {
            markup: markup.to_string(),
            to: to.to_string(),
            from: from.to_string(),
        });

        let mut outcomes = self.outcomes.lock().unwrap();
        let outcome = if outcomes.is_empty() {
            Outcome::Created(CallResult {
                sid: "CA00000000000000000000000000000000".to_string(),
                status: "queued".to_string(),
            })
        } else {
            outcomes.remove(0)
        };

        match outcome {
            Outcome::Created(result) => Ok(result),
            Outcome::Failed(error) => Err(error.into()),
        }
    }
}

pub fn request(message: &str) -> CallRequest {
    CallRequest {
        account_sid: "ACtest".to_string(),
        auth_token: "test-auth-token".to_string(),
        from: "+15017122661".to_string(),
        to: "+15558675310".to_string(),
        message: message.to_string(),
    }
}
