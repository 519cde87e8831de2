mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_image_display() {
        let err = RendererError::Image("unsupported format".to_string());
        assert_eq!(err.to_string(), "image error: unsupported format");
    }

    #[test]
    fn render_target_is_capped_by_pixel_ratio() {
        // 3x display, capped at 2x: 3000x1500 physical -> 2000x1000
        let size = render_target_size(3000, 1500, 3.0, 2.0);
        assert_eq!(
            size,
            PhysicalSize {
                width: 2000,
                height: 1000
            }
        );
    }

    #[test]
    fn render_target_untouched_below_cap() {
        let size = render_target_size(1600, 1200, 2.0, 2.0);
        assert_eq!(
            size,
            PhysicalSize {
                width: 1600,
                height: 1200
            }
        );
        let size = render_target_size(800, 600, 1.0, 2.0);
        assert_eq!(size.width, 800);
    }

    #[test]
    fn render_target_never_zero() {
        let size = render_target_size(0, 0, 1.0, 2.0);
        assert_eq!(
            size,
            PhysicalSize {
                width: 1,
                height: 1
            }
        );
    }
}
