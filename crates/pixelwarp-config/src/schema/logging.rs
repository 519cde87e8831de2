//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "pixelwarp=trace",
            LogLevel::Debug => "pixelwarp=debug",
            LogLevel::Info => "pixelwarp=info",
            LogLevel::Warn => "pixelwarp=warn",
            LogLevel::Error => "pixelwarp=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log the rolling FPS average every N seconds at debug level. 0 = off.
    pub fps_log_interval_secs: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            fps_log_interval_secs: 0,
        }
    }
}
