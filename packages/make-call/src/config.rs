//! Command-line flags and credential resolution.
//!
//! Flags win over environment variables. Empty values count as absent, so
//! `--from ""` falls through to `TWILIO_FROM`. Anything else, whitespace
//! included, is passed on unchanged.

use clap::Parser;
use std::env;

use crate::call::CallRequest;
use crate::error::{CallError, Result};

pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
pub const FROM_VAR: &str = "TWILIO_FROM";
pub const API_BASE_URL_VAR: &str = "TWILIO_API_BASE_URL";

#[derive(Debug, Parser)]
#[command(name = "make-call")]
#[command(about = "Make a phone call via Twilio.")]
pub struct Cli {
    /// Recipient phone number in E.164 format, e.g. +14155552671
    #[arg(long)]
    pub to: String,

    /// Message to say during the call
    #[arg(long)]
    pub message: String,

    /// Twilio Account SID (defaults to TWILIO_ACCOUNT_SID env)
    #[arg(long)]
    pub account_sid: Option<String>,

    /// Twilio Auth Token (defaults to TWILIO_AUTH_TOKEN env)
    #[arg(long)]
    pub auth_token: Option<String>,

    /// From phone (Twilio number) (defaults to TWILIO_FROM env)
    #[arg(long = "from")]
    pub from: Option<String>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CallRequest {
    /// Resolve against the process environment, loading `.env` first if present.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::resolve(cli, |key| env::var(key).ok())
    }

    /// Merge flags over values from `lookup` and check that every field is set.
    pub fn resolve<F>(cli: &Cli, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_sid = pick(cli.account_sid.as_deref(), ACCOUNT_SID_VAR, &lookup);
        let auth_token = pick(cli.auth_token.as_deref(), AUTH_TOKEN_VAR, &lookup);
        let from = pick(cli.from.as_deref(), FROM_VAR, &lookup);

        let missing: Vec<&str> = [
            (ACCOUNT_SID_VAR, account_sid.is_none()),
            (AUTH_TOKEN_VAR, auth_token.is_none()),
            (FROM_VAR, from.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let (Some(account_sid), Some(auth_token), Some(from)) = (account_sid, auth_token, from)
        else {
            return Err(CallError::Configuration(format!(
                "Missing credentials ({}). Set TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, and TWILIO_FROM env vars or pass them via CLI.",
                missing.join(", ")
            )));
        };

        let to = non_empty(Some(cli.to.as_str()))
            .ok_or_else(|| CallError::Configuration("--to must not be empty".into()))?;
        let message = non_empty(Some(cli.message.as_str()))
            .ok_or_else(|| CallError::Configuration("--message must not be empty".into()))?;

        Ok(Self {
            account_sid,
            auth_token,
            from,
            to,
            message,
        })
    }
}

/// Optional API root override, used for proxies and local test servers.
pub fn api_base_url<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup(API_BASE_URL_VAR).as_deref())
}

fn pick<F>(flag: Option<&str>, var: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(flag).or_else(|| non_empty(lookup(var).as_deref()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
