pub mod effect;
pub mod gpu;
pub mod mesh;
pub mod perf;
pub mod pipeline;
pub mod projection;
pub mod render_state;
pub mod texture;

pub use effect::{DisplacementEffect, EffectParameters, PointerState};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use mesh::{Grid, MeshVertex};
pub use perf::FrameTimer;
pub use render_state::RenderState;
pub use texture::SourceImage;
