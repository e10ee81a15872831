//! Textures: surface color lookups by (u, v) and world-space point.

use std::path::Path;
use std::sync::Arc;

use crate::Color;
use rayt_core::{raster::RasterResult, Raster};
use rayt_math::Vec3;

/// Trait for anything that maps a surface location to a color.
pub trait Texture: Send + Sync {
    /// Color at surface coordinates `(u, v)` and hit point `p`.
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color;
}

/// Constant color.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(Color::new(r, g, b))
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.color
    }
}

/// Procedural 3D checker pattern alternating between two textures.
///
/// The pattern is evaluated on the world-space point, so it is continuous
/// across shapes. `frequency` is in radians per world unit.
pub struct CheckerTexture {
    odd: Arc<dyn Texture>,
    even: Arc<dyn Texture>,
    frequency: f32,
}

impl CheckerTexture {
    pub fn new(odd: Arc<dyn Texture>, even: Arc<dyn Texture>, frequency: f32) -> Self {
        Self {
            odd,
            even,
            frequency,
        }
    }

    /// Checker between two solid colors.
    pub fn from_colors(odd: Color, even: Color, frequency: f32) -> Self {
        Self::new(
            Arc::new(SolidColor::new(odd)),
            Arc::new(SolidColor::new(even)),
            frequency,
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        let f = self.frequency;
        let sines = (f * p.x).sin() * (f * p.y).sin() * (f * p.z).sin();
        if sines < 0.0 {
            self.odd.value(u, v, p)
        } else {
            self.even.value(u, v, p)
        }
    }
}

/// Nearest-neighbor lookup into a loaded raster.
///
/// The raster is never empty; [`Raster`] rejects zero-sized images.
///
/// `v = 1` maps to the top row of the image. Coordinates outside [0, 1]
/// clamp to the border pixels.
pub struct ImageTexture {
    raster: Raster,
}

impl ImageTexture {
    pub fn new(raster: Raster) -> Self {
        Self { raster }
    }

    /// Load the image at `path`. Fails if the file is missing or corrupt.
    pub fn open(path: impl AsRef<Path>) -> RasterResult<Self> {
        Raster::open(path).map(Self::new)
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Vec3) -> Color {
        let width = self.raster.width();
        let height = self.raster.height();

        let i = (u * width as f32) as i64;
        let j = ((1.0 - v) * height as f32 - 0.001) as i64;
        let x = i.clamp(0, width as i64 - 1) as u32;
        let y = j.clamp(0, height as i64 - 1) as u32;

        let [r, g, b] = self.raster.pixel(x, y);
        Color::new(r as f32, g as f32, b as f32) / 255.0
    }
}
