//! 4×4 matrix math for the orthographic camera.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Clip-space depth is
//! wgpu's `[0, 1]`, with the camera looking down -Z.

use pixelwarp_config::schema::RendererConfig;

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Orthographic projection for the view-space box `[left, right]` ×
/// `[bottom, top]` × `[-near, -far]`.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = 1.0 / (right - left);
    let tb = 1.0 / (top - bottom);
    let fn_ = 1.0 / (far - near);

    [
        2.0 * rl,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 * tb,
        0.0,
        0.0,
        0.0,
        0.0,
        -fn_,
        0.0,
        -(right + left) * rl,
        -(top + bottom) * tb,
        -near * fn_,
        1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Per-axis scale matrix.
pub fn scale_xyz(x: f32, y: f32, z: f32) -> Mat4 {
    [
        x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1) and return clip-space `[x, y, z, w]`.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

/// Camera placement for the flat effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    /// Camera position on the Z axis; it looks toward -Z.
    pub z: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::from_config(&RendererConfig::default())
    }
}

impl OrthoCamera {
    pub fn from_config(config: &RendererConfig) -> Self {
        Self {
            z: config.camera_z,
            near: config.near,
            far: config.far,
        }
    }

    /// View-projection for a surface of `width`×`height` pixels centered
    /// on the origin: one world unit is one pixel.
    pub fn view_projection(&self, width: f32, height: f32) -> Mat4 {
        let proj = orthographic(
            -width * 0.5,
            width * 0.5,
            -height * 0.5,
            height * 0.5,
            self.near,
            self.far,
        );
        mul(&proj, &translate(0.0, 0.0, -self.z))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_then_identity() {
        let t = translate(1.0, 2.0, 3.0);
        assert!(approx_eq(&mul(&t, &IDENTITY), &t, 1e-6));
    }

    #[test]
    fn scale_then_translate_order() {
        // translate × scale: scale first, then translate
        let m = mul(&translate(10.0, 0.0, 0.0), &scale_xyz(2.0, 3.0, 1.0));
        let p = transform_point(&m, [1.0, 1.0, 0.0]);
        assert!((p[0] - 12.0).abs() < 1e-6);
        assert!((p[1] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn surface_corners_map_to_ndc_corners() {
        let vp = OrthoCamera::default().view_projection(800.0, 600.0);
        let tl = transform_point(&vp, [-400.0, 300.0, 0.0]);
        let br = transform_point(&vp, [400.0, -300.0, 0.0]);
        assert!((tl[0] + 1.0).abs() < 1e-6 && (tl[1] - 1.0).abs() < 1e-6);
        assert!((br[0] - 1.0).abs() < 1e-6 && (br[1] + 1.0).abs() < 1e-6);
        assert!((tl[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn no_perspective_foreshortening() {
        let vp = OrthoCamera::default().view_projection(800.0, 600.0);
        let flat = transform_point(&vp, [100.0, 50.0, 0.0]);
        let deep = transform_point(&vp, [100.0, 50.0, -500.0]);
        assert_eq!(flat[0], deep[0]);
        assert_eq!(flat[1], deep[1]);
        assert_eq!(deep[3], 1.0);
    }

    #[test]
    fn depth_range_spans_near_to_far() {
        let cam = OrthoCamera::default();
        let vp = cam.view_projection(100.0, 100.0);
        let near = transform_point(&vp, [0.0, 0.0, cam.z - cam.near]);
        assert!(near[2].abs() < 1e-6);
        let far = transform_point(&vp, [0.0, 0.0, cam.z - cam.far]);
        assert!((far[2] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn default_camera_keeps_lifted_vertices_in_depth_range() {
        let vp = OrthoCamera::default().view_projection(100.0, 100.0);
        for z in [0.0, 1e-30, 1e-3, 15.0, 500.0] {
            let clip = transform_point(&vp, [0.0, 0.0, z]);
            assert!(
                clip[2] > 0.0 && clip[2] < 1.0,
                "z = {z} mapped to depth {}",
                clip[2]
            );
        }
    }

    #[test]
    fn camera_on_the_surface_plane_clips_any_lift() {
        let cam = OrthoCamera {
            z: 1.0,
            near: 1.0,
            far: 1000.0,
        };
        let vp = cam.view_projection(100.0, 100.0);
        let lifted = transform_point(&vp, [0.0, 0.0, 1e-3]);
        assert!(lifted[2] < 0.0);
    }
}
