//! Window and logging validation.

use pixelwarp_common::Color;

use crate::schema::{LoggingConfig, PixelwarpConfig, WindowConfig};

use super::helpers::validate_range;

const MIN_WINDOW_DIM: u32 = 16;
const MAX_WINDOW_DIM: u32 = 16384;
const MAX_FPS_LOG_INTERVAL: u32 = 3600;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &PixelwarpConfig) {
    let w = &config.window;
    // 0 means "use the image size"
    if w.width != 0 {
        validate_range(errors, "window.width", w.width, MIN_WINDOW_DIM, MAX_WINDOW_DIM);
    }
    if w.height != 0 {
        validate_range(errors, "window.height", w.height, MIN_WINDOW_DIM, MAX_WINDOW_DIM);
    }
    if Color::from_hex(&w.background).is_none() {
        errors.push(format!(
            "window.background = {:?} is not a #rrggbb or #rrggbbaa color",
            w.background
        ));
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &PixelwarpConfig) {
    validate_range(
        errors,
        "logging.fps_log_interval_secs",
        config.logging.fps_log_interval_secs,
        0,
        MAX_FPS_LOG_INTERVAL,
    );
}

fn dim_ok(value: u32) -> bool {
    value == 0 || (MIN_WINDOW_DIM..=MAX_WINDOW_DIM).contains(&value)
}

pub(crate) fn sanitize_window(window: &mut WindowConfig) {
    let defaults = WindowConfig::default();
    if !dim_ok(window.width) {
        window.width = defaults.width;
    }
    if !dim_ok(window.height) {
        window.height = defaults.height;
    }
    if Color::from_hex(&window.background).is_none() {
        window.background = defaults.background;
    }
}

pub(crate) fn sanitize_logging(logging: &mut LoggingConfig) {
    if logging.fps_log_interval_secs > MAX_FPS_LOG_INTERVAL {
        logging.fps_log_interval_secs = LoggingConfig::default().fps_log_interval_secs;
    }
}
