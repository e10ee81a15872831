//! Uncompressed bitmap output.

use std::path::{Path, PathBuf};

use image::{ColorType, ImageFormat};
use thiserror::Error;

/// Errors that can occur while writing a bitmap.
#[derive(Error, Debug)]
pub enum BitmapError {
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGB8")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type BitmapResult<T> = Result<T, BitmapError>;

/// Write a row-major, top-row-first RGB8 buffer as a 24-bit BMP file.
pub fn write_bmp(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    rgb: &[u8],
) -> BitmapResult<()> {
    let path = path.as_ref();
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(BitmapError::SizeMismatch {
            width,
            height,
            expected,
            actual: rgb.len(),
        });
    }

    image::save_buffer_with_format(path, rgb, width, height, ColorType::Rgb8, ImageFormat::Bmp)
        .map_err(|source| BitmapError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Wrote {}x{} bitmap to {}", width, height, path.display());
    Ok(())
}
