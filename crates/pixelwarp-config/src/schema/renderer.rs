//! Renderer and camera configuration.

use serde::{Deserialize, Serialize};

/// Renderer and camera configuration.
///
/// The camera sits at `camera_z` looking down -Z with an orthographic
/// frustum sized to the surface. A vertex lifted to `z` is drawn while
/// `camera_z - far <= z <= camera_z - near`; the defaults leave room for
/// lifts up to 999 pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Upper bound on physical pixels per logical pixel (valid range: 0.5-4.0).
    pub max_pixel_ratio: f64,
    /// Present in FIFO mode, one frame per display refresh.
    pub vsync: bool,
    pub camera_z: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            vsync: true,
            camera_z: 1000.0,
            near: 1.0,
            far: 2000.0,
        }
    }
}
