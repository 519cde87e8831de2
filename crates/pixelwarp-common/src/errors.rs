use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PixelwarpError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing source image: {0}")]
    MissingImage(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("effect.grid = 0 is out of range [1, 512]".into());
        assert_eq!(
            err.to_string(),
            "config validation error: effect.grid = 0 is out of range [1, 512]"
        );
    }

    #[test]
    fn pixelwarp_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PixelwarpError = config_err.into();
        assert!(matches!(err, PixelwarpError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn pixelwarp_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PixelwarpError = io_err.into();
        assert!(matches!(err, PixelwarpError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn pixelwarp_error_other_variants() {
        let err = PixelwarpError::MissingImage("no path configured".into());
        assert_eq!(err.to_string(), "missing source image: no path configured");

        let err = PixelwarpError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = PixelwarpError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = PixelwarpError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
