//! Place an outbound Twilio voice call that speaks a message.
//!
//! The binary merges CLI flags over `TWILIO_*` environment variables into a
//! [`CallRequest`], then hands it to [`initiate_call`] together with a
//! [`VoiceCallClient`].

pub mod call;
pub mod config;
pub mod error;

pub use call::{
    build_markup, format_result, initiate_call, CallRequest, CallResult, TwilioVoiceClient,
    VoiceCallClient,
};
pub use config::Cli;
pub use error::{CallError, Result};
