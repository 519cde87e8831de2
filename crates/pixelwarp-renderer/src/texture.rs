//! Source image decoding and GPU upload.
//!
//! The image is sampled at (or near) native resolution on a surface that
//! keeps deforming, so the texture gets a single mip level and linear
//! filtering.

use std::path::Path;

use crate::gpu::RendererError;

/// A decoded RGBA8 image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Decode an image file (format detected from its contents).
    pub fn open(path: &Path) -> Result<Self, RendererError> {
        let decoded = image::ImageReader::open(path)
            .map_err(|e| RendererError::Image(format!("failed to open {}: {e}", path.display())))?
            .with_guessed_format()
            .map_err(|e| RendererError::Image(format!("failed to read {}: {e}", path.display())))?
            .decode()?;
        let rgba = decoded.to_rgba8();
        tracing::info!(
            "Loaded source image {} ({}x{})",
            path.display(),
            rgba.width(),
            rgba.height()
        );
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }

    /// Wrap already-decoded RGBA8 pixels.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RendererError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(RendererError::Image(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// The uploaded image plus the view and sampler the mesh shader reads.
pub struct ImageTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl ImageTexture {
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, image: &SourceImage) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("source image"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width * 4),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("source image sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_checks_length() {
        assert!(SourceImage::from_rgba(2, 2, vec![0; 16]).is_ok());
        let err = SourceImage::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes"));
    }

    #[test]
    fn from_rgba_rejects_empty() {
        assert!(SourceImage::from_rgba(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn open_missing_file_is_image_error() {
        let err = SourceImage::open(Path::new("/tmp/pixelwarp-no-such-image.png")).unwrap_err();
        assert!(matches!(err, RendererError::Image(_)));
    }

    #[test]
    fn open_decodes_png() {
        let dir = std::env::temp_dir().join(format!("pixelwarp-texture-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("checker.png");
        let img = image::RgbaImage::from_fn(3, 2, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 128])
            }
        });
        img.save(&path).unwrap();

        let source = SourceImage::open(&path).unwrap();
        assert_eq!(source.width(), 3);
        assert_eq!(source.height(), 2);
        assert_eq!(source.pixels().len(), 3 * 2 * 4);
        assert_eq!(&source.pixels()[4..8], &[0, 0, 0, 128]);

        std::fs::remove_dir_all(&dir).ok();
    }
}
