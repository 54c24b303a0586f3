//! The static backdrop image on the GPU
//!
//! The backdrop is decoded with the `image` crate and uploaded once at
//! startup. Sampling uses nearest filtering and repeat addressing: the
//! scroll shaders push the sample coordinates past [0, 1] and rely on the
//! texture wrapping around.

use std::path::Path;

use image::GenericImageView;

/// A GPU texture with its view and sampler, plus the pixel dimensions the
/// scroll shader needs for coordinate math.
pub struct BackdropTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl BackdropTexture {
    /// Load a backdrop from an image file on disk.
    pub fn from_path<P: AsRef<Path>>(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: P,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let img = image::load_from_memory(&bytes)?;
        let label = path.to_string_lossy();
        Ok(Self::from_image(device, queue, &img, &label))
    }

    /// Upload a decoded image.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &image::DynamicImage,
        label: &str,
    ) -> Self {
        let dimensions = img.dimensions();
        let rgba = img.to_rgba8();
        Self::from_pixels(device, queue, dimensions.0, dimensions.1, &rgba, label)
    }

    /// Upload raw RGBA8 pixel data.
    pub fn from_pixels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        pixels: &[u8],
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
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
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Nearest keeps the pixel-art look; repeat lets the scroll wrap.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }

    /// Generate the built-in backdrop: a night-to-horizon sky gradient with
    /// banded haze, used when no image file is available.
    pub fn builtin(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let (width, height) = Self::BUILTIN_SIZE;
        let pixels = builtin_pixels(width, height);
        Self::from_pixels(device, queue, width, height, &pixels, "builtin backdrop")
    }

    /// Dimensions of the built-in backdrop.
    pub const BUILTIN_SIZE: (u32, u32) = (512, 1024);

    /// Texture dimensions in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Pixel data for the built-in backdrop.
///
/// Deterministic so the fallback looks the same on every machine: a vertical
/// gradient from deep night blue to a pale horizon, with sine-based haze
/// bands that give the scroll something to move against.
fn builtin_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let t = y as f32 / (height - 1) as f32;
        let base_r = 18.0 + 110.0 * t;
        let base_g = 24.0 + 150.0 * t;
        let base_b = 64.0 + 160.0 * t;
        for x in 0..width {
            let fx = x as f32;
            let fy = y as f32;
            // Two offset sine bands make drifting haze streaks.
            let band = (fx * 0.049 + fy * 0.011).sin() + (fx * 0.017 - fy * 0.005).sin();
            let haze = 14.0 * band * (1.0 - t) + 6.0 * band;
            pixels.push((base_r + haze).clamp(0.0, 255.0) as u8);
            pixels.push((base_g + haze).clamp(0.0, 255.0) as u8);
            pixels.push((base_b + haze).clamp(0.0, 255.0) as u8);
            pixels.push(0xFF);
        }
    }
    pixels
}

/// Backdrop loading error
#[derive(Debug)]
pub enum TextureError {
    Io(std::io::Error),
    Decode(image::ImageError),
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::Io(e) => write!(f, "Failed to read backdrop file: {}", e),
            TextureError::Decode(e) => write!(f, "Failed to decode backdrop image: {}", e),
        }
    }
}

impl std::error::Error for TextureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pixels_are_rgba() {
        let (w, h) = (16, 8);
        let pixels = builtin_pixels(w, h);
        assert_eq!(pixels.len(), (w * h * 4) as usize);
        // Every alpha byte is opaque.
        for alpha in pixels.iter().skip(3).step_by(4) {
            assert_eq!(*alpha, 0xFF);
        }
    }

    #[test]
    fn test_builtin_pixels_brighten_toward_bottom() {
        let (w, h) = (4, 256);
        let pixels = builtin_pixels(w, h);
        let top_blue = pixels[2] as i32;
        let bottom_blue = pixels[((h - 1) * w * 4 + 2) as usize] as i32;
        assert!(bottom_blue > top_blue);
    }

    #[test]
    fn test_error_display() {
        let err = TextureError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(format!("{}", err).contains("read backdrop file"));
    }
}
