//! Per-frame rendering.

use std::time::Instant;

use pixelwarp_common::PixelwarpError;

use super::core::PixelwarpApp;

impl PixelwarpApp {
    /// Draw one frame if the loop is running, then schedule the next.
    pub(super) fn render_frame(&mut self) {
        if !self.frame_loop.is_running() {
            return;
        }
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        if let Err(e) = rs.render_frame() {
            self.fail(PixelwarpError::Renderer(e.to_string()));
            return;
        }

        self.frame_loop.frame_presented(Instant::now());
        self.request_redraw();
    }
}
