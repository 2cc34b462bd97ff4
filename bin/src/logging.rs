//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps the `-v` count and `--quiet` flag to a log level.
pub(crate) const fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence when set.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "readtime={},{}",
            directive(level),
            crate_filters(level)
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn directive(level: Level) -> String {
    level.as_str().to_lowercase()
}

fn crate_filters(level: Level) -> String {
    [
        "readtime_lib",
        "readtime_estimate",
        "readtime_locales",
        "readtime_config",
    ]
    .iter()
    .map(|target| format!("{target}={}", directive(level)))
    .collect::<Vec<_>>()
    .join(",")
}
