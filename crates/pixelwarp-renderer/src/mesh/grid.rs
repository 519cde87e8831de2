//! Grid mesh generation.
//!
//! Builds a flat `(segments + 1)²` vertex lattice over a `width`×`height`
//! pixel rectangle centered on the origin, mapped edge-to-edge with the
//! texture. Rows run top to bottom, columns left to right; each cell is
//! split into two triangles through a shared index buffer.

use pixelwarp_common::SurfaceSize;

use super::types::MeshVertex;

/// The subdivided image surface.
#[derive(Debug, Clone)]
pub struct Grid {
    segments: u32,
    size: SurfaceSize,
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl Grid {
    /// Build a grid of `segments`×`segments` cells over `size`.
    ///
    /// `segments` is clamped to at least 1.
    pub fn new(segments: u32, size: SurfaceSize) -> Self {
        let segments = segments.max(1);
        let stride = segments + 1;
        let seg_w = size.width / segments as f32;
        let seg_h = size.height / segments as f32;

        let mut vertices = Vec::with_capacity((stride * stride) as usize);
        for row in 0..stride {
            let y = size.half_height() - row as f32 * seg_h;
            for col in 0..stride {
                let x = col as f32 * seg_w - size.half_width();
                vertices.push(MeshVertex {
                    position: [x, y, 0.0],
                    uv: [
                        col as f32 / segments as f32,
                        row as f32 / segments as f32,
                    ],
                });
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for row in 0..segments {
            for col in 0..segments {
                let a = row * stride + col;
                let b = (row + 1) * stride + col;
                let c = (row + 1) * stride + col + 1;
                let d = row * stride + col + 1;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            segments,
            size,
            vertices,
            indices,
        }
    }

    /// Cells per axis.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// The pixel rectangle the grid was built over.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Mutable vertex access. Callers are expected to touch `z` only.
    pub fn vertices_mut(&mut self) -> &mut [MeshVertex] {
        &mut self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

// =============================================================================
// Tests
// =============================================================================
