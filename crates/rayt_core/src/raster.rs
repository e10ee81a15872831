//! Raster loading for image textures.
//!
//! Decodes image files through the `image` crate into a tightly packed,
//! row-major RGB8 buffer. Alpha and other channel layouts are dropped or
//! converted on load.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a raster.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height}x{channels}")]
    SizeMismatch {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },
}

pub type RasterResult<T> = Result<T, RasterError>;

/// A decoded image: `width * height` RGB8 pixels, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Raster {
    /// Build a raster from interleaved RGB8 bytes.
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> RasterResult<Self> {
        Self::from_interleaved(width, height, bytes, 3)
    }

    /// Build a raster from interleaved RGBA8 bytes, discarding alpha.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> RasterResult<Self> {
        Self::from_interleaved(width, height, bytes, 4)
    }

    fn from_interleaved(
        width: u32,
        height: u32,
        bytes: &[u8],
        channels: usize,
    ) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::Empty { width, height });
        }

        let expected = width as usize * height as usize * channels;
        if bytes.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                channels,
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(channels)
            .map(|p| [p[0], p[1], p[2]])
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Load and decode an image file.
    ///
    /// A missing or undecodable file is an error; there is no fallback
    /// image.
    pub fn open(path: impl AsRef<Path>) -> RasterResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| RasterError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let raster = Self::from_rgb8(width, height, rgb.as_raw())?;

        log::debug!(
            "Loaded raster: {} ({}x{}, {:.1} KB)",
            path.display(),
            width,
            height,
            raster.size_bytes() as f32 / 1024.0
        );

        Ok(raster)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Get pixel at integer coordinates. Callers clamp coordinates first.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Total size of the pixel data in bytes.
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8() {
        let bytes = [255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        let raster = Raster::from_rgb8(2, 2, &bytes).unwrap();

        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel(0, 0), [255, 0, 0]);
        assert_eq!(raster.pixel(1, 0), [0, 255, 0]);
        assert_eq!(raster.pixel(1, 1), [10, 20, 30]);
        assert_eq!(raster.size_bytes(), 12);
    }

    #[test]
    fn test_from_rgba8_drops_alpha() {
        let bytes = [1, 2, 3, 255, 4, 5, 6, 0];
        let raster = Raster::from_rgba8(2, 1, &bytes).unwrap();

        assert_eq!(raster.pixels(), &[[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn test_size_mismatch() {
        let err = Raster::from_rgb8(2, 2, &[0; 11]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::SizeMismatch {
                expected: 12,
                actual: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_raster_rejected() {
        assert!(matches!(
            Raster::from_rgb8(0, 0, &[]),
            Err(RasterError::Empty {
                width: 0,
                height: 0
            })
        ));
        assert!(matches!(
            Raster::from_rgba8(3, 0, &[]),
            Err(RasterError::Empty { .. })
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let path = std::env::temp_dir().join("rayt_definitely_missing_texture.png");
        let err = Raster::open(&path).unwrap_err();

        assert!(matches!(err, RasterError::Open { .. }));
        assert!(err.to_string().contains("rayt_definitely_missing_texture"));
    }
}
