use crate::{config::Config, event::Release};

/// Pick the download page matching the release channel.
pub(crate) fn release_url<'a>(config: &'a Config, prerelease: bool) -> &'a str {
    if prerelease {
        &config.preview_url
    } else {
        &config.stable_url
    }
}

/// Render the announcement for `release` and cap it at the configured length.
pub(crate) fn message(config: &Config, release: &Release) -> String {
    let rendered = config
        .template
        .replace("{tag}", &release.tag_name)
        .replace("{url}", release_url(config, release.prerelease))
        .replace("{body}", release.body.as_deref().unwrap_or_default());
    truncate(&rendered, config.max_length, &config.truncation_marker)
}

/// Cap `text` at `max_length` characters, appending `marker` when shortened.
///
/// A shortened result is always exactly `max_length` characters and ends in
/// `marker` (counting `char`s, so a code point is never split). If
/// `max_length` can't even fit the marker, the marker itself is cut down.
pub(crate) fn truncate(text: &str, max_length: usize, marker: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let keep = max_length.saturating_sub(marker.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.extend(marker.chars().take(max_length - keep));
    truncated
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{message, release_url, truncate};
    use crate::{config::Config, event::Release};

    #[test]
    fn prereleases_point_at_the_preview_page() {
        let config = Config::default();

        assert_eq!(
            release_url(&config, true),
            "https://zed.dev/releases/preview/latest"
        );
        assert_eq!(
            release_url(&config, false),
            "https://zed.dev/releases/stable/latest"
        );
    }

    #[test]
    fn stable_release_message() {
        let config = Config::default();
        let release = Release {
            tag_name: String::from("v1.2.0"),
            prerelease: false,
            body: Some(String::from("Bug fixes.")),
        };

        assert_eq!(
            message(&config, &release),
            "📣 Zed [v1.2.0](<https://zed.dev/releases/stable/latest>) was just released!\n\nBug fixes."
        );
    }

    #[test]
    fn missing_notes_render_as_empty() {
        let config = Config::default();
        let release = Release {
            tag_name: String::from("v0.3.0-pre"),
            prerelease: true,
            body: None,
        };

        assert_eq!(
            message(&config, &release),
            "📣 Zed [v0.3.0-pre](<https://zed.dev/releases/preview/latest>) was just released!\n\n"
        );
    }

    #[rstest]
    #[case("")]
    #[case("short")]
    #[case("exactly at the bound")]
    fn short_text_is_unchanged(#[case] text: &str) {
        assert_eq!(truncate(text, text.chars().count(), "..."), text);
    }

    #[test]
    fn long_text_is_cut_to_the_bound() {
        let text = "a".repeat(2100);

        let truncated = truncate(&text, 2000, "...");

        assert_eq!(truncated.chars().count(), 2000);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn truncation_is_idempotent() {
        let text = "b".repeat(2100);

        let once = truncate(&text, 2000, "...");
        let twice = truncate(&once, 2000, "...");

        assert_eq!(once, twice);
    }

    #[test]
    fn multi_byte_characters_are_not_split() {
        let text = "📣".repeat(50);

        let truncated = truncate(&text, 10, "...");

        assert_eq!(truncated.chars().count(), 10);
        assert_eq!(truncated, format!("{}...", "📣".repeat(7)));
    }

    #[test]
    fn bound_smaller_than_marker_cuts_the_marker() {
        assert_eq!(truncate("too long anyway", 2, "..."), "..");
    }

    #[test]
    fn long_release_notes_still_fit_in_one_discord_message() {
        let config = Config::default();
        let release = Release {
            tag_name: String::from("v1.3.0"),
            prerelease: false,
            body: Some("Many bug fixes. ".repeat(200)),
        };

        let content = message(&config, &release);

        assert_eq!(content.chars().count(), 2000);
        assert!(content.ends_with("..."));
        assert!(content.starts_with("📣 Zed [v1.3.0]"));
    }
}
