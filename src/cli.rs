use clap::{crate_version, Arg, ArgAction, Command};

pub(crate) fn command() -> Command {
    Command::new("herald")
        .version(crate_version!())
        .about("Announce a published release to a Discord channel")
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help(
                    "Pretend to run the workflow, printing what would happen \
                    instead of sending anything",
                ),
        )
        .arg(
            Arg::new("event")
                .long("event")
                .value_name("PATH")
                .env("GITHUB_EVENT_PATH")
                .help("Path to a GitHub `release` event payload to announce"),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .value_name("TAG")
                .help("Announce this tag instead of reading an event payload"),
        )
        .arg(
            Arg::new("prerelease")
                .long("prerelease")
                .action(ArgAction::SetTrue)
                .requires("tag")
                .help("The tag passed via --tag is a prerelease"),
        )
        .arg(
            Arg::new("notes")
                .long("notes")
                .value_name("TEXT")
                .requires("tag")
                .help("Release notes for the tag passed via --tag"),
        )
        .arg(
            Arg::new("webhook-url")
                .long("webhook-url")
                .value_name("URL")
                .env("DISCORD_WEBHOOK_URL")
                .hide_env_values(true)
                .help("The Discord webhook to post to (treat this as a secret)"),
        )
}
