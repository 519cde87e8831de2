//! Host window configuration.

use serde::{Deserialize, Serialize};

/// Host window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in logical pixels. 0 uses the image's natural width.
    pub width: u32,
    /// Inner height in logical pixels. 0 uses the image's natural height.
    pub height: u32,
    pub transparent: bool,
    /// Clear color behind the mesh, `#rrggbb` or `#rrggbbaa`.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pixelwarp".into(),
            width: 0,
            height: 0,
            transparent: true,
            background: "#00000000".into(),
        }
    }
}
