//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use pixelwarp_common::PixelwarpError;
use pixelwarp_renderer::RenderState;

use super::core::PixelwarpApp;

impl PixelwarpApp {
    /// Create the window and initialize the GPU renderer.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), PixelwarpError> {
        let image = self
            .image
            .take()
            .ok_or_else(|| PixelwarpError::Other("source image already consumed".into()))?;

        let (width, height) = initial_window_size(
            self.config.window.width,
            self.config.window.height,
            image.width(),
            image.height(),
        );

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_transparent(self.config.window.transparent)
            .with_inner_size(LogicalSize::new(width as f64, height as f64));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PixelwarpError::Window(format!("failed to create window: {e}")))?;

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), &self.config, &image))
                .map_err(|e| PixelwarpError::Renderer(format!("failed to initialize: {e}")))?;

        tracing::info!(
            "Window created ({}x{} logical, scale {:.2})",
            width,
            height,
            window.scale_factor()
        );

        self.render_state = Some(render_state);
        self.window = Some(window);
        Ok(())
    }
}

/// Window size in logical pixels: configured dimensions, with zeros taken
/// from the image's natural size.
fn initial_window_size(
    config_width: u32,
    config_height: u32,
    image_width: u32,
    image_height: u32,
) -> (u32, u32) {
    let width = if config_width > 0 { config_width } else { image_width };
    let height = if config_height > 0 {
        config_height
    } else {
        image_height
    };
    (width.max(1), height.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_config_uses_image_size() {
        assert_eq!(initial_window_size(0, 0, 640, 480), (640, 480));
    }

    #[test]
    fn configured_size_wins() {
        assert_eq!(initial_window_size(800, 600, 640, 480), (800, 600));
    }

    #[test]
    fn each_dimension_falls_back_independently() {
        assert_eq!(initial_window_size(800, 0, 640, 480), (800, 480));
        assert_eq!(initial_window_size(0, 0, 0, 0), (1, 1));
    }
}
