//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::PixelwarpApp;

impl ApplicationHandler for PixelwarpApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.frame_loop.phase().is_stopped() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            self.fail(e);
            event_loop.exit();
            return;
        }

        self.frame_loop.start(Instant::now());
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("Escape pressed");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let scale = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor())
                    .unwrap_or(1.0);
                if let Some(ref mut rs) = self.render_state {
                    rs.resize(size.width, size.height, scale);
                    tracing::debug!("Resized to {}x{} (scale {scale:.2})", size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(ref mut rs) = self.render_state {
                    rs.pointer_moved(position.x, position.y);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.phase().is_stopped() {
            event_loop.exit();
        }
    }
}
