//! PixelwarpApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use pixelwarp_common::PixelwarpError;
use pixelwarp_config::PixelwarpConfig;
use pixelwarp_renderer::{RenderState, SourceImage};

use super::frame_loop::FrameLoop;

/// Top-level application state.
pub struct PixelwarpApp {
    pub(super) config: PixelwarpConfig,

    // Decoded source image, consumed when the renderer is created
    pub(super) image: Option<SourceImage>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    pub(super) frame_loop: FrameLoop,

    // First fatal error hit inside the event loop
    pub(super) exit_error: Option<PixelwarpError>,
}

impl PixelwarpApp {
    pub fn new(config: PixelwarpConfig, image: SourceImage) -> Self {
        let frame_loop = FrameLoop::new(config.logging.fps_log_interval_secs);
        Self {
            config,
            image: Some(image),
            window: None,
            render_state: None,
            frame_loop,
            exit_error: None,
        }
    }

    /// Take the error that stopped the event loop, if any.
    pub fn take_exit_error(&mut self) -> Option<PixelwarpError> {
        self.exit_error.take()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    /// Record a fatal error and stop the frame loop.
    pub(super) fn fail(&mut self, error: PixelwarpError) {
        tracing::error!("{error}");
        if self.exit_error.is_none() {
            self.exit_error = Some(error);
        }
        self.shutdown();
    }
}
