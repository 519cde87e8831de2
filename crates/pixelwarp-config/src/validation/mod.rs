//! Full configuration validation.
//!
//! Each domain has its own submodule; `validate` calls them all and
//! collects errors into a single `ConfigError`. `sanitize` resets every
//! invalid value to its default (oversized grids are clamped instead),
//! which is how bad configuration is recovered at startup.

mod effect;
mod helpers;
mod renderer;
mod window;


pub use effect::{MAX_EFFECT_VALUE, MAX_GRID, MIN_EFFECT_VALUE};

use crate::schema::PixelwarpConfig;
use pixelwarp_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PixelwarpConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    effect::validate_effect(&mut errors, config);
    renderer::validate_renderer(&mut errors, config);
    window::validate_window(&mut errors, config);
    window::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Replace every invalid value with its default.
pub fn sanitize(config: &mut PixelwarpConfig) {
    effect::sanitize_effect(&mut config.effect);
    renderer::sanitize_renderer(&mut config.renderer);
    window::sanitize_window(&mut config.window);
    window::sanitize_logging(&mut config.logging);
}
