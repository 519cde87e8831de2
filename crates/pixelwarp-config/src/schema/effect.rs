//! Displacement effect parameters.

use serde::{Deserialize, Serialize};

use crate::attributes::{lenient_float, lenient_grid};

/// Default mesh subdivision count per axis.
pub const DEFAULT_GRID: u32 = 15;
/// Default distance decay rate.
pub const DEFAULT_MOUSE: f64 = 0.13;
/// Default displacement amplitude multiplier.
pub const DEFAULT_STRENGTH: f64 = 0.15;

/// Effect parameters, read once at startup.
///
/// Values are parsed leniently: numbers or numeric strings are accepted,
/// and anything unparsable or zero falls back to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Mesh subdivision count per axis (valid range: 1-512).
    #[serde(deserialize_with = "lenient_grid")]
    pub grid: u32,
    /// Distance decay rate (must be > 0).
    #[serde(deserialize_with = "lenient_mouse")]
    pub mouse: f64,
    /// Displacement amplitude multiplier (must be > 0).
    #[serde(deserialize_with = "lenient_strength")]
    pub strength: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID,
            mouse: DEFAULT_MOUSE,
            strength: DEFAULT_STRENGTH,
        }
    }
}

fn lenient_mouse<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient_float(deserializer, "effect.mouse", DEFAULT_MOUSE)
}

fn lenient_strength<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient_float(deserializer, "effect.strength", DEFAULT_STRENGTH)
}
