mod frame;
mod helpers;
mod state;

pub use helpers::clear_color_for;
pub use state::RenderState;
