//! Source image configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the texture comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Path to a PNG or JPEG file. Empty means "not configured".
    pub path: String,
}

impl ImageConfig {
    /// The configured path, if any.
    pub fn path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}
