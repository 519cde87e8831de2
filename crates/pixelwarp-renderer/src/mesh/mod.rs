//! Planar grid mesh spanning the host surface.

mod grid;
mod types;

pub use grid::*;
pub use types::*;
