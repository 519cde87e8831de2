//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# pixelwarp configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[effect]
# grid = 15              # mesh subdivisions per axis, 1-512 (larger is clamped)
# mouse = 0.13           # falloff rate; larger = tighter bump around the pointer
# strength = 0.15        # displacement amplitude (x100 pixels)

[image]
# path = "/path/to/image.png"   # PNG or JPEG; the positional CLI argument wins

[window]
# title = "pixelwarp"
# width = 0              # logical px, 0 = image width
# height = 0             # logical px, 0 = image height
# transparent = true
# background = "#00000000"

[renderer]
# max_pixel_ratio = 2.0  # 0.5-4.0
# vsync = true
# camera_z = 1000.0     # lifts above camera_z - near are clipped
# near = 1.0
# far = 2000.0

[logging]
# level = "info"         # trace, debug, info, warn, error
# fps_log_interval_secs = 0
"##
    .to_string()
}
