use std::sync::Arc;
use winit::window::Window;

use pixelwarp_common::SurfaceSize;
use pixelwarp_config::PixelwarpConfig;

use crate::effect::{DisplacementEffect, EffectParameters};
use crate::gpu::{render_target_size, GpuContext, PhysicalSize, RendererError, SurfaceOptions};
use crate::pipeline::MeshPipeline;
use crate::projection::OrthoCamera;
use crate::texture::{ImageTexture, SourceImage};

use super::helpers::clear_color_for;

/// Everything needed to draw the displaced image: GPU context, the effect's
/// CPU-side grid, the mesh pipeline and the uploaded image.
pub struct RenderState {
    pub gpu: GpuContext,
    pub effect: DisplacementEffect,
    pub pipeline: MeshPipeline,
    pub texture: ImageTexture,
    pub camera: OrthoCamera,
    pub clear_color: wgpu::Color,
    /// Window size in physical pixels, before the pixel-ratio cap.
    pub window_size: PhysicalSize,
    pub scale_factor: f64,
    max_pixel_ratio: f64,
}

impl RenderState {
    /// Create a fully initialized render state for `window`.
    pub async fn new(
        window: Arc<Window>,
        config: &PixelwarpConfig,
        image: &SourceImage,
    ) -> Result<Self, RendererError> {
        let inner = window.inner_size();
        let scale_factor = window.scale_factor();
        let max_pixel_ratio = config.renderer.max_pixel_ratio;
        let target = render_target_size(inner.width, inner.height, scale_factor, max_pixel_ratio);
        let surface = SurfaceSize::from_physical(inner.width, inner.height, scale_factor);

        let gpu = GpuContext::new(
            window,
            target,
            SurfaceOptions {
                vsync: config.renderer.vsync,
                transparent: config.window.transparent,
            },
        )
        .await?;

        let effect = DisplacementEffect::new(EffectParameters::from_config(&config.effect), surface);
        let texture = ImageTexture::upload(&gpu.device, &gpu.queue, image);
        let pipeline = MeshPipeline::new(&gpu.device, gpu.format(), effect.grid(), &texture);

        let camera = OrthoCamera::from_config(&config.renderer);

        tracing::info!(
            surface_w = surface.width,
            surface_h = surface.height,
            target_w = target.width,
            target_h = target.height,
            image_w = image.width(),
            image_h = image.height(),
            "render state ready"
        );

        Ok(Self {
            gpu,
            effect,
            pipeline,
            texture,
            camera,
            clear_color: clear_color_for(&config.window.background, config.window.transparent),
            window_size: PhysicalSize {
                width: inner.width,
                height: inner.height,
            },
            scale_factor,
            max_pixel_ratio,
        })
    }

    /// Handle a window resize: track the new surface size and reconfigure the
    /// swapchain at the capped pixel ratio. Zero sizes (minimized) are ignored.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        if width == 0 || height == 0 {
            tracing::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.window_size = PhysicalSize { width, height };
        self.scale_factor = scale_factor;
        self.effect
            .resize(SurfaceSize::from_physical(width, height, scale_factor));
        let target = render_target_size(width, height, scale_factor, self.max_pixel_ratio);
        self.gpu.resize(target.width, target.height);
    }

    /// Feed a cursor position in physical window pixels to the effect.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let moved = self.effect.pointer_moved(
            x,
            y,
            self.window_size.width as f64,
            self.window_size.height as f64,
        );
        if !moved {
            tracing::trace!("pointer event on degenerate window ignored");
        }
    }
}
