use std::io::Write;

use miette::Diagnostic;
use reqwest::{Client, Response};
use serde_json::json;

use crate::dry_run::DryRun;

/// Tells Discord not to unfurl links in the message into preview embeds.
const SUPPRESS_EMBEDS: u8 = 1 << 2;

/// Post `content` to a Discord webhook.
///
/// The webhook URL is a secret, so it must never end up in logs or error
/// messages. There is no retry: a failed call fails the whole run.
pub(crate) async fn post_announcement(
    webhook_url: Option<&str>,
    content: &str,
    dry_run: DryRun<'_>,
) -> Result<(), Error> {
    if let Some(stdout) = dry_run {
        writeln!(stdout, "Would post to the Discord webhook:").map_err(Error::Stdout)?;
        writeln!(stdout, "{content}").map_err(Error::Stdout)?;
        return Ok(());
    }

    let webhook_url = webhook_url.ok_or(Error::MissingWebhookUrl)?;
    Client::new()
        .post(webhook_url)
        .json(&json!({
            "content": content,
            "flags": SUPPRESS_EMBEDS,
        }))
        .send()
        .await
        .and_then(Response::error_for_status)
        // `without_url` keeps the webhook URL out of the error.
        .map_err(|source| Error::ApiRequest {
            err: source.without_url().to_string(),
        })?;
    log::info!("Posted announcement ({} characters)", content.chars().count());
    Ok(())
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error("Trouble communicating with Discord: {err}")]
    #[diagnostic(
        code(discord::api_request_error),
        help(
            "This may be a network issue or an invalid webhook. The webhook URL \
            is omitted from this message on purpose."
        )
    )]
    ApiRequest { err: String },
    #[error("No webhook URL was provided")]
    #[diagnostic(
        code(discord::missing_webhook_url),
        help("Set the `DISCORD_WEBHOOK_URL` environment variable or pass `--webhook-url`.")
    )]
    MissingWebhookUrl,
    #[error("Error writing to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
