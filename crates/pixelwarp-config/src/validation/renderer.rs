//! Renderer and camera validation.

use crate::schema::{PixelwarpConfig, RendererConfig};

use super::helpers::{in_range_f64, validate_range_f64};

pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &PixelwarpConfig) {
    let r = &config.renderer;
    validate_range_f64(errors, "renderer.max_pixel_ratio", r.max_pixel_ratio, 0.5, 4.0);
    if !(r.camera_z.is_finite() && r.near.is_finite() && r.far.is_finite()) {
        errors.push("renderer.camera_z/near/far must be finite".into());
    } else if r.far <= r.near {
        errors.push(format!(
            "renderer.far = {} must be greater than renderer.near = {}",
            r.far, r.near
        ));
    }
}

pub(crate) fn sanitize_renderer(renderer: &mut RendererConfig) {
    let defaults = RendererConfig::default();
    if !in_range_f64(renderer.max_pixel_ratio, 0.5, 4.0) {
        renderer.max_pixel_ratio = defaults.max_pixel_ratio;
    }
    let camera_ok = renderer.camera_z.is_finite()
        && renderer.near.is_finite()
        && renderer.far.is_finite()
        && renderer.far > renderer.near;
    if !camera_ok {
        renderer.camera_z = defaults.camera_z;
        renderer.near = defaults.near;
        renderer.far = defaults.far;
    }
}
