use std::path::PathBuf;

use clap::Parser;
use pixelwarp_config::EffectOverrides;

/// pixelwarp: an image that bulges toward the mouse pointer.
#[derive(Parser, Debug)]
#[command(name = "pixelwarp", version, about)]
pub struct Args {
    /// Image to display. Overrides `[image] path` from the config.
    pub image: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid subdivisions per side (parsed leniently, e.g. "20" or "20px").
    #[arg(long, allow_hyphen_values = true)]
    pub grid: Option<String>,

    /// Falloff rate of the bulge with pixel distance.
    #[arg(long, allow_hyphen_values = true)]
    pub mouse: Option<String>,

    /// Bulge amplitude multiplier.
    #[arg(long, allow_hyphen_values = true)]
    pub strength: Option<String>,

    /// Log filter override, e.g. "pixelwarp=debug".
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    pub fn effect_overrides(&self) -> EffectOverrides {
        EffectOverrides {
            grid: self.grid.clone(),
            mouse: self.mouse.clone(),
            strength: self.strength.clone(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
