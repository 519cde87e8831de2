//! `tracing` subscriber setup.
//!
//! The filter sits behind a reload layer so the config file's
//! `[logging] level` can take effect after the subscriber is installed.
//! Priority: `--log-level`, then `RUST_LOG`, then the config.

use pixelwarp_config::schema::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

const DEFAULT_DIRECTIVE: &str = "pixelwarp=info";

/// Handle to the installed filter.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    /// Set when the CLI or environment chose the filter.
    pinned: bool,
}

impl LogHandle {
    /// Switch to the config file's level unless the filter is pinned.
    pub fn apply_config(&self, level: LogLevel) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.handle.reload(build_filter(level.as_directive())) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }
}

/// Install the global subscriber.
pub fn init(cli_directive: Option<&str>) -> LogHandle {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (directive, pinned) = initial_directive(cli_directive, env.as_deref());

    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    LogHandle { handle, pinned }
}

/// Pick the startup directive and whether it overrides the config.
fn initial_directive<'a>(cli: Option<&'a str>, env: Option<&'a str>) -> (&'a str, bool) {
    let non_empty = |s: &&str| !s.trim().is_empty();
    match (cli.filter(non_empty), env.filter(non_empty)) {
        (Some(cli), _) => (cli, true),
        (None, Some(env)) => (env, true),
        (None, None) => (DEFAULT_DIRECTIVE, false),
    }
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("pixelwarp: invalid log filter {directive:?} ({e}), using {DEFAULT_DIRECTIVE}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}
