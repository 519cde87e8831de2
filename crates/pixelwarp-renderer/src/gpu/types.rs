/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("image error: {0}")]
    Image(String),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<image::ImageError> for RendererError {
    fn from(e: image::ImageError) -> Self {
        RendererError::Image(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

/// Size of the render target for a window of `width`x`height` physical
/// pixels at `scale_factor`, with the pixel ratio capped at `max_ratio`.
pub fn render_target_size(
    width: u32,
    height: u32,
    scale_factor: f64,
    max_ratio: f64,
) -> PhysicalSize {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    let ratio = scale.min(max_ratio) / scale;
    PhysicalSize {
        width: ((width as f64 * ratio).round() as u32).max(1),
        height: ((height as f64 * ratio).round() as u32).max(1),
    }
}
