//! Lenient parsing of effect attributes.
//!
//! Attribute values arrive as loosely-typed text (CLI flags) or as whatever
//! TOML value the user wrote. Integers are read like `parseInt` and floats
//! like `parseFloat`: leading whitespace is skipped and the longest numeric
//! prefix wins, so `"20px"` reads as 20. A value that yields nothing, or
//! yields zero, is treated as absent and the default is used instead.

use serde::Deserialize;

use crate::schema::{EffectConfig, DEFAULT_GRID, DEFAULT_MOUSE, DEFAULT_STRENGTH};

/// Parse the integer prefix of `s`. Returns `None` when there are no digits.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the decimal floating-point prefix of `s`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent that is only consumed when followed by digits.
/// `Infinity` is recognised after the sign.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok()
}

/// Grid attribute: integer prefix, must be a positive count.
pub fn grid_attr(raw: &str) -> Option<u32> {
    match parse_int_prefix(raw)? {
        n if n >= 1 => Some(u32::try_from(n).unwrap_or(u32::MAX)),
        _ => None,
    }
}

/// Float attribute: prefix parse, rejecting NaN and zero.
pub fn float_attr(raw: &str) -> Option<f64> {
    match parse_float_prefix(raw)? {
        v if v.is_nan() || v == 0.0 => None,
        v => Some(v),
    }
}

/// String-valued overrides for the effect section, e.g. from CLI flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectOverrides {
    pub grid: Option<String>,
    pub mouse: Option<String>,
    pub strength: Option<String>,
}

impl EffectOverrides {
    /// Apply every present override to `effect`.
    ///
    /// A present but unparsable value resets that field to its default,
    /// the same as an invalid attribute would.
    pub fn apply(&self, effect: &mut EffectConfig) {
        if let Some(raw) = &self.grid {
            effect.grid = grid_attr(raw).unwrap_or_else(|| {
                warn_fallback("grid", raw, DEFAULT_GRID as f64);
                DEFAULT_GRID
            });
        }
        if let Some(raw) = &self.mouse {
            effect.mouse = float_attr(raw).unwrap_or_else(|| {
                warn_fallback("mouse", raw, DEFAULT_MOUSE);
                DEFAULT_MOUSE
            });
        }
        if let Some(raw) = &self.strength {
            effect.strength = float_attr(raw).unwrap_or_else(|| {
                warn_fallback("strength", raw, DEFAULT_STRENGTH);
                DEFAULT_STRENGTH
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_none() && self.mouse.is_none() && self.strength.is_none()
    }
}

fn warn_fallback(name: &str, raw: &str, default: f64) {
    tracing::warn!("invalid {name} value {raw:?}, using default {default}");
}

/// Serde adapter for the `grid` field.
pub(crate) fn lenient_grid<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .filter(|n| *n >= 1)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX)),
        serde_json::Value::String(s) => grid_attr(s),
        _ => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        tracing::warn!("invalid effect.grid value {value}, using default {DEFAULT_GRID}");
        DEFAULT_GRID
    }))
}

/// Serde adapter shared by the float fields.
pub(crate) fn lenient_float<'de, D>(
    deserializer: D,
    name: &str,
    default: f64,
) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| *v != 0.0),
        serde_json::Value::String(s) => float_attr(s),
        _ => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        tracing::warn!("invalid {name} value {value}, using default {default}");
        default
    }))
}
