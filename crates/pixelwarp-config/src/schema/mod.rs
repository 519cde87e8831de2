//! Configuration schema types for pixelwarp.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the effect's stock values.

mod effect;
mod image;
mod logging;
mod renderer;
mod window;

pub use effect::*;
pub use image::*;
pub use logging::*;
pub use renderer::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for pixelwarp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelwarpConfig {
    pub effect: EffectConfig,
    pub image: ImageConfig,
    pub window: WindowConfig,
    pub renderer: RendererConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_effect_parameters() {
        let config = PixelwarpConfig::default();
        assert_eq!(config.effect.grid, 15);
        assert!((config.effect.mouse - 0.13).abs() < 1e-12);
        assert!((config.effect.strength - 0.15).abs() < 1e-12);
    }

    #[test]
    fn default_renderer_camera() {
        let config = PixelwarpConfig::default();
        assert!((config.renderer.max_pixel_ratio - 2.0).abs() < 1e-12);
        assert!(config.renderer.vsync);
        assert_eq!(config.renderer.camera_z, 1000.0);
        assert_eq!(config.renderer.near, 1.0);
        assert_eq!(config.renderer.far, 2000.0);
    }

    #[test]
    fn default_window_is_transparent_and_image_sized() {
        let config = PixelwarpConfig::default();
        assert_eq!(config.window.title, "pixelwarp");
        assert_eq!(config.window.width, 0);
        assert_eq!(config.window.height, 0);
        assert!(config.window.transparent);
        assert_eq!(config.window.background, "#00000000");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: PixelwarpConfig = toml::from_str("").unwrap();
        assert_eq!(config, PixelwarpConfig::default());
    }

    #[test]
    fn effect_accepts_numeric_strings() {
        let config: PixelwarpConfig = toml::from_str(
            r#"
[effect]
grid = "20"
mouse = "0.5"
strength = 0.3
"#,
        )
        .unwrap();
        assert_eq!(config.effect.grid, 20);
        assert!((config.effect.mouse - 0.5).abs() < 1e-12);
        assert!((config.effect.strength - 0.3).abs() < 1e-12);
    }

    #[test]
    fn effect_garbage_values_fall_back_to_defaults() {
        let config: PixelwarpConfig = toml::from_str(
            r#"
[effect]
grid = "lots"
mouse = true
strength = 0
"#,
        )
        .unwrap();
        assert_eq!(config.effect, EffectConfig::default());
    }

    #[test]
    fn effect_integer_for_float_field() {
        let config: PixelwarpConfig = toml::from_str("[effect]\nmouse = 1\n").unwrap();
        assert!((config.effect.mouse - 1.0).abs() < 1e-12);
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::default().as_directive(), "pixelwarp=info");
        assert_eq!(LogLevel::Trace.as_directive(), "pixelwarp=trace");
        let config: PixelwarpConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn image_path_blank_is_none() {
        let mut image = ImageConfig::default();
        assert!(image.path().is_none());
        image.path = "  ".into();
        assert!(image.path().is_none());
        image.path = "photo.png".into();
        assert_eq!(image.path().unwrap(), std::path::PathBuf::from("photo.png"));
    }
}
