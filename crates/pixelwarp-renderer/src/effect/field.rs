use pixelwarp_common::SurfaceSize;

use crate::mesh::{Grid, MeshVertex};

use super::displacement::displace;
use super::params::EffectParameters;
use super::pointer::PointerState;

/// Owns the grid, the pointer and the surface size for one effect instance.
///
/// The grid's planar coordinates are fixed at construction. A resize only
/// changes how the pointer maps into pixels; the mesh is stretched by the
/// renderer rather than re-subdivided.
#[derive(Debug, Clone)]
pub struct DisplacementEffect {
    params: EffectParameters,
    grid: Grid,
    pointer: PointerState,
    surface: SurfaceSize,
}

impl DisplacementEffect {
    pub fn new(params: EffectParameters, surface: SurfaceSize) -> Self {
        let grid = Grid::new(params.grid_size, surface);
        tracing::debug!(
            grid = params.grid_size,
            vertices = grid.vertex_count(),
            width = surface.width,
            height = surface.height,
            "displacement grid built"
        );
        Self {
            params,
            grid,
            pointer: PointerState::CENTER,
            surface,
        }
    }

    pub fn params(&self) -> &EffectParameters {
        &self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Record a cursor move given in window coordinates of a
    /// `width`×`height` window. Returns `false` if the window is degenerate
    /// and the pointer was left unchanged.
    pub fn pointer_moved(&mut self, px: f64, py: f64, width: f64, height: f64) -> bool {
        match PointerState::from_window(px, py, width, height) {
            Some(p) => {
                self.pointer = p;
                true
            }
            None => false,
        }
    }

    /// Track a new surface size. Empty sizes are ignored.
    pub fn resize(&mut self, surface: SurfaceSize) {
        if !surface.is_empty() {
            self.surface = surface;
        }
    }

    /// Model scale that stretches the construction-time grid over the
    /// current surface.
    pub fn mesh_scale(&self) -> [f32; 2] {
        let built = self.grid.size();
        let sx = if built.width > 0.0 {
            self.surface.width / built.width
        } else {
            1.0
        };
        let sy = if built.height > 0.0 {
            self.surface.height / built.height
        } else {
            1.0
        };
        [sx, sy]
    }

    /// Recompute every vertex's displacement for the current pointer and
    /// return the updated vertices.
    pub fn update(&mut self) -> &[MeshVertex] {
        let pointer_px = self.pointer.to_surface_pixels(self.surface);
        displace(self.grid.vertices_mut(), pointer_px, &self.params);
        self.grid.vertices()
    }
}

// =============================================================================
// Tests
// =============================================================================
