use pixelwarp_config::schema::{EffectConfig, DEFAULT_GRID, DEFAULT_MOUSE, DEFAULT_STRENGTH};

/// Scales the sub-unit `distort_strength` into a pixel range.
pub const DISPLACEMENT_SCALE: f32 = 100.0;

/// Immutable effect parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParameters {
    /// Cells per grid axis, always >= 1.
    pub grid_size: u32,
    /// Spatial decay rate per pixel of distance.
    pub mouse_strength: f32,
    /// Displacement amplitude; the peak lift is this × 100 pixels.
    pub distort_strength: f32,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID,
            mouse_strength: DEFAULT_MOUSE as f32,
            distort_strength: DEFAULT_STRENGTH as f32,
        }
    }
}

impl EffectParameters {
    pub fn new(grid_size: u32, mouse_strength: f32, distort_strength: f32) -> Self {
        Self {
            grid_size: grid_size.max(1),
            mouse_strength,
            distort_strength,
        }
    }

    /// Values that do not survive the narrowing to f32 (overflow, or
    /// underflow to zero) fall back to the defaults.
    pub fn from_config(config: &EffectConfig) -> Self {
        Self::new(
            config.grid,
            narrow("mouse", config.mouse, DEFAULT_MOUSE),
            narrow("strength", config.strength, DEFAULT_STRENGTH),
        )
    }

    /// Displacement at zero distance from the pointer.
    pub fn peak_displacement(&self) -> f32 {
        self.distort_strength * DISPLACEMENT_SCALE
    }
}

fn narrow(name: &str, value: f64, default: f64) -> f32 {
    let narrowed = value as f32;
    let peak = narrowed * DISPLACEMENT_SCALE;
    if narrowed > 0.0 && peak.is_finite() {
        narrowed
    } else {
        tracing::warn!("effect.{name} = {value} is not representable, using {default}");
        default as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_attributes() {
        let params = EffectParameters::default();
        assert_eq!(params.grid_size, 15);
        assert!((params.mouse_strength - 0.13).abs() < 1e-7);
        assert!((params.distort_strength - 0.15).abs() < 1e-7);
    }

    #[test]
    fn from_default_config_equals_default() {
        let params = EffectParameters::from_config(&EffectConfig::default());
        assert_eq!(params, EffectParameters::default());
    }

    #[test]
    fn grid_size_clamped_to_one() {
        assert_eq!(EffectParameters::new(0, 0.1, 0.1).grid_size, 1);
    }

    #[test]
    fn peak_is_strength_times_hundred() {
        let params = EffectParameters::default();
        assert!((params.peak_displacement() - 15.0).abs() < 1e-5);
    }

    #[test]
    fn overflowing_strength_falls_back() {
        let config = EffectConfig {
            grid: 15,
            mouse: 0.13,
            strength: 1e300,
        };
        let params = EffectParameters::from_config(&config);
        assert!((params.distort_strength - 0.15).abs() < 1e-7);
        assert!(params.peak_displacement().is_finite());
    }

    #[test]
    fn overflowing_mouse_falls_back() {
        let config = EffectConfig {
            grid: 15,
            mouse: 1e300,
            strength: 0.15,
        };
        assert!((EffectParameters::from_config(&config).mouse_strength - 0.13).abs() < 1e-7);
    }
}
