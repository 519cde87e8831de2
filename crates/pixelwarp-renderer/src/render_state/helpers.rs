use pixelwarp_common::Color;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Linear clear color for a `#RRGGBB[AA]` background.
///
/// Transparent surfaces are composited premultiplied, so the color channels
/// are scaled by alpha. Opaque surfaces ignore the alpha channel. Invalid hex
/// falls back to fully transparent.
pub fn clear_color_for(hex: &str, transparent: bool) -> wgpu::Color {
    let color = Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("invalid background color {hex:?}, using transparent");
        Color::TRANSPARENT
    });
    let [r, g, b, a] = color.to_linear_rgba();
    if transparent {
        wgpu::Color {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    } else {
        wgpu::Color { r, g, b, a: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_background_clears_to_nothing() {
        let c = clear_color_for("#00000000", true);
        assert_eq!(c, wgpu::Color::TRANSPARENT);
    }

    #[test]
    fn transparent_background_is_premultiplied() {
        let c = clear_color_for("#FFFFFF80", true);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
        assert!((c.r - c.a).abs() < 1e-9);
    }

    #[test]
    fn opaque_surface_forces_full_alpha() {
        let c = clear_color_for("#FF000000", false);
        assert_eq!(c.a, 1.0);
        assert!((c.r - 1.0).abs() < 1e-9);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn invalid_hex_falls_back_to_transparent() {
        assert_eq!(clear_color_for("nope", true), wgpu::Color::TRANSPARENT);
    }
}
