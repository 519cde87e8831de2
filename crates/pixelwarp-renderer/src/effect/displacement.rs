use crate::mesh::MeshVertex;

use super::params::EffectParameters;

/// Out-of-plane lift at `distance` pixels from the pointer:
/// `exp(-distance * mouse_strength) * distort_strength * 100`.
#[inline]
pub fn displacement_at(distance: f32, params: &EffectParameters) -> f32 {
    (-distance * params.mouse_strength).exp() * params.peak_displacement()
}

/// Recompute `z` for every vertex from its planar distance to `pointer_px`.
///
/// `pointer_px` is in the same surface-centered pixel space as the vertex
/// positions. Only `position[2]` is written.
pub fn displace(vertices: &mut [MeshVertex], pointer_px: [f32; 2], params: &EffectParameters) {
    let [px, py] = pointer_px;

    for v in vertices.iter_mut() {
        let dx = v.position[0] - px;
        let dy = v.position[1] - py;
        v.position[2] = displacement_at((dx * dx + dy * dy).sqrt(), params);
    }
}
