//! pixelwarp configuration system.
//!
//! TOML-based configuration with lenient effect attributes and
//! fallback-to-default validation. All sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pixelwarp_config::{load_config, config_to_toml};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_toml(&config));
//! ```

pub mod attributes;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use attributes::EffectOverrides;
pub use schema::{PixelwarpConfig, CONFIG_SCHEMA_VERSION};

use pixelwarp_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default location.
///
/// An explicit path must exist; the default location is created with a
/// commented template on first run. Invalid values come back replaced by
/// their defaults.
pub fn load_config(path: Option<&Path>) -> Result<PixelwarpConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a TOML string.
pub fn config_to_toml(config: &PixelwarpConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_toml_contains_all_sections() {
        let toml = config_to_toml(&PixelwarpConfig::default());
        assert!(toml.contains("[effect]"));
        assert!(toml.contains("[image]"));
        assert!(toml.contains("[window]"));
        assert!(toml.contains("[renderer]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = PixelwarpConfig::default();
        let parsed: PixelwarpConfig = toml::from_str(&config_to_toml(&config)).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/tmp/pixelwarp_missing_dir/config.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
