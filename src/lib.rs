use std::{
    io::{stdout, Write},
    path::Path,
};

use clap::ArgMatches;
use miette::Diagnostic;
use thiserror::Error;

use crate::{config::Config, event::Release};

mod announcement;
mod cli;
mod config;
mod dry_run;
mod event;
mod integrations;

/// Parse CLI arguments and run the whole announcement workflow once.
pub fn run() -> miette::Result<()> {
    let matches = cli::command().get_matches();
    announce(&matches)?;
    Ok(())
}

#[tokio::main]
async fn announce(matches: &ArgMatches) -> Result<(), Error> {
    let config = Config::load()?;

    let release = match matches.get_one::<String>("tag") {
        Some(tag) => Release {
            tag_name: tag.clone(),
            prerelease: matches.get_flag("prerelease"),
            body: matches.get_one::<String>("notes").cloned(),
        },
        None => {
            let path = matches.get_one::<String>("event").ok_or(Error::NoRelease)?;
            let event = event::Event::load(Path::new(path))?;
            if event.action != "published" {
                log::info!("Event action is `{}`, nothing to announce", event.action);
                return Ok(());
            }
            if event.repository.owner.login != config.owner {
                log::info!(
                    "Release belongs to `{}`, not `{}`, skipping",
                    event.repository.owner.login,
                    config.owner,
                );
                return Ok(());
            }
            event.release
        }
    };

    let content = announcement::message(&config, &release);

    let mut dry_run_stdout: Option<Box<dyn Write>> = if matches.get_flag("dry-run") {
        Some(Box::new(stdout()))
    } else {
        None
    };
    let webhook_url = matches.get_one::<String>("webhook-url").map(String::as_str);

    integrations::discord::post_announcement(webhook_url, &content, &mut dry_run_stdout).await?;
    Ok(())
}

#[derive(Debug, Diagnostic, Error)]
enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Event(#[from] event::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Discord(#[from] integrations::discord::Error),
    #[error("There is no release to announce")]
    #[diagnostic(
        code(herald::no_release),
        help(
            "Pass `--tag` (with optional `--prerelease` and `--notes`) or point \
            `GITHUB_EVENT_PATH` / `--event` at a GitHub release event payload."
        )
    )]
    NoRelease,
}
