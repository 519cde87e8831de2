//! wgpu pipeline for the displaced image grid.

mod mesh_pipeline;
mod uniforms;

pub use mesh_pipeline::*;
pub use uniforms::*;
