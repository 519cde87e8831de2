use pixelwarp_common::SurfaceSize;

/// Most recent pointer position in normalized device coordinates.
///
/// Both axes span `[-1, 1]`; x grows rightward and y grows *upward*, the
/// opposite of window coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Normalize a window-space cursor position (origin top-left, y down).
    ///
    /// `width` and `height` must be in the same units as the position.
    /// Returns `None` for a degenerate window.
    pub fn from_window(px: f64, py: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 || !px.is_finite() || !py.is_finite() {
            return None;
        }
        let x = (px / width) * 2.0 - 1.0;
        let y = -(py / height) * 2.0 + 1.0;
        Some(Self::new(x as f32, y as f32))
    }

    /// Pointer position in surface-centered pixels.
    pub fn to_surface_pixels(&self, surface: SurfaceSize) -> [f32; 2] {
        [
            self.x * surface.half_width(),
            self.y * surface.half_height(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_center_is_origin() {
        let p = PointerState::from_window(400.0, 300.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState::CENTER);
    }

    #[test]
    fn top_left_maps_to_minus_one_plus_one() {
        let p = PointerState::from_window(0.0, 0.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState::new(-1.0, 1.0));
    }

    #[test]
    fn bottom_right_maps_to_plus_one_minus_one() {
        let p = PointerState::from_window(800.0, 600.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState::new(1.0, -1.0));
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let upper = PointerState::from_window(400.0, 100.0, 800.0, 600.0).unwrap();
        let lower = PointerState::from_window(400.0, 500.0, 800.0, 600.0).unwrap();
        assert!(upper.y > 0.0);
        assert!(lower.y < 0.0);
    }

    #[test]
    fn outside_window_is_clamped() {
        let p = PointerState::from_window(-50.0, 900.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState::new(-1.0, -1.0));
    }

    #[test]
    fn degenerate_window_is_rejected() {
        assert!(PointerState::from_window(1.0, 1.0, 0.0, 600.0).is_none());
        assert!(PointerState::from_window(f64::NAN, 1.0, 800.0, 600.0).is_none());
    }

    #[test]
    fn surface_pixels_scale_by_half_extent() {
        let p = PointerState::new(0.5, -1.0);
        assert_eq!(
            p.to_surface_pixels(SurfaceSize::new(200.0, 100.0)),
            [50.0, -50.0]
        );
    }
}
