//! Effect parameter validation.

use crate::schema::{EffectConfig, PixelwarpConfig};

use super::helpers::{in_range_f64, validate_range, validate_range_f64};

/// Largest accepted mesh subdivision count per axis. Keeps the grid at
/// 263,169 vertices and its u32 index buffer at about 6 MiB.
pub const MAX_GRID: u32 = 512;

/// Smallest `mouse`/`strength` that survives the f32 conversion as non-zero.
pub const MIN_EFFECT_VALUE: f64 = f32::MIN_POSITIVE as f64;

/// Largest `mouse`/`strength`; the peak lift (`strength * 100`) stays an
/// order of magnitude below `f32::MAX`.
pub const MAX_EFFECT_VALUE: f64 = f32::MAX as f64 / 1000.0;

pub(crate) fn validate_effect(errors: &mut Vec<String>, config: &PixelwarpConfig) {
    validate_range(errors, "effect.grid", config.effect.grid, 1, MAX_GRID);
    validate_range_f64(
        errors,
        "effect.mouse",
        config.effect.mouse,
        MIN_EFFECT_VALUE,
        MAX_EFFECT_VALUE,
    );
    validate_range_f64(
        errors,
        "effect.strength",
        config.effect.strength,
        MIN_EFFECT_VALUE,
        MAX_EFFECT_VALUE,
    );
}

/// Grids above [`MAX_GRID`] are clamped to it; zero falls back to the
/// default. Out-of-range floats fall back to their defaults.
pub(crate) fn sanitize_effect(effect: &mut EffectConfig) {
    let defaults = EffectConfig::default();
    if effect.grid < 1 {
        effect.grid = defaults.grid;
    } else if effect.grid > MAX_GRID {
        effect.grid = MAX_GRID;
    }
    if !in_range_f64(effect.mouse, MIN_EFFECT_VALUE, MAX_EFFECT_VALUE) {
        effect.mouse = defaults.mouse;
    }
    if !in_range_f64(effect.strength, MIN_EFFECT_VALUE, MAX_EFFECT_VALUE) {
        effect.strength = defaults.strength;
    }
}
