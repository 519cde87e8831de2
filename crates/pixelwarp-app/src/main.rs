mod app_state;
mod cli;
mod logging;

use std::process::ExitCode;

use winit::event_loop::EventLoop;

use pixelwarp_common::PixelwarpError;
use pixelwarp_config::{config_to_toml, validation, PixelwarpConfig};
use pixelwarp_renderer::SourceImage;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- pixelwarp crashed ---");
        eprintln!("Run with --log-level pixelwarp=debug for more detail.");
        eprintln!("-------------------------\n");
        default_hook(info);
    }));
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();
    let logging = logging::init(args.log_level.as_deref());

    tracing::info!("pixelwarp v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(args, &logging) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Args, logging: &logging::LogHandle) -> Result<(), PixelwarpError> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = pixelwarp_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PixelwarpConfig::default()
    });
    logging.apply_config(config.logging.level);

    args.effect_overrides().apply(&mut config.effect);
    if let Err(e) = validation::validate(&config) {
        tracing::warn!("{e}; falling back to defaults for invalid values");
        validation::sanitize(&mut config);
    }

    if let Some(ref image) = args.image {
        config.image.path = image.to_string_lossy().into_owned();
    }

    if args.print_config {
        print!("{}", config_to_toml(&config));
        return Ok(());
    }

    tracing::info!(
        grid = config.effect.grid,
        mouse = config.effect.mouse,
        strength = config.effect.strength,
        "Effect parameters"
    );

    let path = config.image.path().ok_or_else(|| {
        PixelwarpError::MissingImage(
            "pass an image path or set [image] path in the config".into(),
        )
    })?;
    let image = SourceImage::open(&path).map_err(|e| PixelwarpError::MissingImage(e.to_string()))?;

    let event_loop = EventLoop::new().map_err(|e| PixelwarpError::Window(e.to_string()))?;
    let mut app = app_state::PixelwarpApp::new(config, image);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| PixelwarpError::Window(format!("event loop error: {e}")))?;

    match app.take_exit_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
