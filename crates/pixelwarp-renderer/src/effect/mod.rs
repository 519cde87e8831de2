//! The displacement field effect.
//!
//! A planar image grid whose vertices are lifted out of plane with an
//! exponential falloff around the pointer, recomputed once per frame.
//! Everything here is CPU-side and GPU-agnostic; `RenderState` uploads the
//! result.

mod displacement;
mod field;
mod params;
mod pointer;

pub use displacement::*;
pub use field::*;
pub use params::*;
pub use pointer::*;
