use pixelwarp_common::SurfaceSize;

use crate::projection::{mul, scale_xyz, Mat4, OrthoCamera};

/// Per-frame uniforms for the mesh shader.
///
/// Layout: one `mat4x4<f32>` = 64 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: Mat4,
}

impl MeshUniforms {
    /// Build the MVP for the current surface.
    ///
    /// `mesh_scale` stretches the construction-time grid over `surface`.
    pub fn new(camera: &OrthoCamera, surface: SurfaceSize, mesh_scale: [f32; 2]) -> Self {
        let view_proj = camera.view_projection(surface.width, surface.height);
        let model = scale_xyz(mesh_scale[0], mesh_scale[1], 1.0);
        Self {
            mvp: mul(&view_proj, &model),
        }
    }
}
