mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_hex_round_trips() {
        let original = Color::from_rgba(171, 205, 239, 64);
        let parsed = Color::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
        assert_eq!(Color::from_rgba(255, 0, 128, 255).to_hex(), "#ff0080");
    }

    #[test]
    fn linear_rgba_endpoints() {
        let [r, g, b, a] = Color::from_rgba(0, 255, 0, 0).to_linear_rgba();
        assert_eq!(r, 0.0);
        assert!((g - 1.0).abs() < 1e-9);
        assert_eq!(b, 0.0);
        assert_eq!(a, 0.0);
    }

    #[test]
    fn linear_rgba_mid_gray_is_darker_than_srgb() {
        let [r, ..] = Color::from_rgba(128, 128, 128, 255).to_linear_rgba();
        assert!(r < 128.0 / 255.0);
        assert!((r - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn surface_size_half_extents() {
        let s = SurfaceSize::new(200.0, 100.0);
        assert_eq!(s.half_width(), 100.0);
        assert_eq!(s.half_height(), 50.0);
        assert!(!s.is_empty());
        assert!(SurfaceSize::new(0.0, 10.0).is_empty());
    }

    #[test]
    fn surface_size_from_physical_divides_scale() {
        let s = SurfaceSize::from_physical(1600, 1200, 2.0);
        assert_eq!(s, SurfaceSize::new(800.0, 600.0));
    }

    #[test]
    fn effect_phase_transitions() {
        assert!(!EffectPhase::Initializing.is_running());
        assert!(EffectPhase::Running.is_running());
        assert!(EffectPhase::Stopped.is_stopped());
        assert_eq!(EffectPhase::default(), EffectPhase::Initializing);
    }
}
