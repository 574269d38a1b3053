// Entry point for the make-call CLI

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use make_call::{config, format_result, initiate_call, CallRequest, Cli, TwilioVoiceClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let request = CallRequest::from_cli(&cli)?;
    let base_url = config::api_base_url(|key| std::env::var(key).ok());

    let client = TwilioVoiceClient::for_request(&request, base_url.as_deref())?;
    let result = initiate_call(&client, &request)
        .await
        .context("Failed to place call")?;

    println!("{} {}", "✓".bright_green(), format_result(&result));

    Ok(())
}

// Logs go to stderr so stdout carries only the result line.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info,make_call=info,twilio=info",
        _ => "debug,make_call=debug,twilio=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
