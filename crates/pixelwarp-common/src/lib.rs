pub mod errors;
pub mod types;

pub use errors::{ConfigError, PixelwarpError};
pub use types::{Color, EffectPhase, SurfaceSize};

pub type Result<T> = std::result::Result<T, PixelwarpError>;
