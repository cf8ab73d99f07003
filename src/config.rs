use std::fs;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Everything about the announcement that isn't part of the release itself.
///
/// Loaded from `herald.toml` in the working directory, every key is optional
/// and defaults to announcing Zed releases.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Only releases from this repository owner are announced.
    pub(crate) owner: String,
    pub(crate) stable_url: String,
    pub(crate) preview_url: String,
    /// The announcement, with `{tag}`, `{url}`, and `{body}` placeholders.
    pub(crate) template: String,
    /// Discord rejects messages longer than this.
    pub(crate) max_length: usize,
    pub(crate) truncation_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: String::from("zed-industries"),
            stable_url: String::from("https://zed.dev/releases/stable/latest"),
            preview_url: String::from("https://zed.dev/releases/preview/latest"),
            template: String::from("📣 Zed [{tag}](<{url}>) was just released!\n\n{body}"),
            max_length: 2000,
            truncation_marker: String::from("..."),
        }
    }
}

impl Config {
    const CONFIG_PATH: &'static str = "herald.toml";

    /// Create a Config from `herald.toml`, or fall back to the default config.
    ///
    /// ## Errors
    /// 1. Cannot parse file contents into a Config
    pub(crate) fn load() -> Result<Self, Error> {
        let Ok(source_code) = fs::read_to_string(Self::CONFIG_PATH) else {
            log::debug!("No `herald.toml` found, using default config");
            return Ok(Self::default());
        };
        toml::from_str(&source_code).map_err(Error::from)
    }
}

#[derive(Debug, Diagnostic, Error)]
pub(crate) enum Error {
    #[error(transparent)]
    #[diagnostic(code(config::toml), help("Check that `herald.toml` is valid TOML."))]
    Toml(#[from] toml::de::Error),
}
