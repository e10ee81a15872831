//! rayt core - image I/O and render settings.
//!
//! This crate provides the pieces of the renderer that touch the outside
//! world:
//!
//! - **Raster loading**: decode an image file into an RGB8 buffer for
//!   image textures
//! - **Bitmap output**: write a finished RGB8 buffer as an uncompressed BMP
//! - **Settings**: render resolution, sampling and tone options, loadable
//!   from JSON
//!
//! # Example
//!
//! ```ignore
//! use rayt_core::{bitmap::write_bmp, settings::RenderSettings};
//!
//! let settings = RenderSettings::from_file("render.json")?;
//! write_bmp("render.bmp", settings.width, settings.height, &pixels)?;
//! ```

pub mod bitmap;
pub mod raster;
pub mod settings;

// Re-export commonly used types
pub use bitmap::{write_bmp, BitmapError};
pub use raster::{Raster, RasterError};
pub use settings::{RenderSettings, SettingsError, Tonemap};
