use std::{fs, io, path::Path};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// The slice of a GitHub `release` event payload that the announcement needs.
#[derive(Debug, Deserialize)]
pub(crate) struct Event {
    pub(crate) action: String,
    pub(crate) release: Release,
    pub(crate) repository: Repository,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Release {
    pub(crate) tag_name: String,
    #[serde(default)]
    pub(crate) prerelease: bool,
    /// GitHub sends `null` when a release has no notes.
    #[serde(default)]
    pub(crate) body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Repository {
    pub(crate) owner: Owner,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Owner {
    pub(crate) login: String,
}

impl Event {
    pub(crate) fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(Error::from)
    }
}

#[derive(Debug, Diagnostic, Error)]
pub(crate) enum Error {
    #[error("Could not read event payload {path}: {source}")]
    #[diagnostic(
        code(event::could_not_read),
        help("`GITHUB_EVENT_PATH` (or `--event`) must point at a readable file.")
    )]
    Read { path: String, source: io::Error },
    #[error("Could not parse event payload: {0}")]
    #[diagnostic(
        code(event::could_not_parse),
        help("The file must contain a GitHub `release` event as JSON.")
    )]
    Parse(#[from] serde_json::Error),
}
