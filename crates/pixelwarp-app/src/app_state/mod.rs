//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, window, renderer and the frame loop.

mod core;
mod event_handler;
mod frame_loop;
mod init;
mod render;
mod shutdown;

pub use core::PixelwarpApp;
