//! Deterministic teardown: stop the frame loop, release GPU resources,
//! close the window.

use super::core::PixelwarpApp;

impl PixelwarpApp {
    /// Stop rendering and drop everything the loop owned. Safe to call more
    /// than once.
    ///
    /// The render state goes before the window so the surface never
    /// outlives it.
    pub(super) fn shutdown(&mut self) {
        if !self.frame_loop.stop() {
            return;
        }
        tracing::info!("Initiating shutdown");

        self.render_state = None;
        self.window = None;
        self.image = None;

        tracing::info!(
            frames = self.frame_loop.frames_total(),
            "Frame loop stopped, resources released"
        );
    }
}
