//! RGB8 image buffer with an ordered tone filter chain.
//!
//! Linear radiance goes in through [`Image::write`] (or a [`RowWriter`]
//! during parallel rendering), runs through every filter in order, and is
//! quantized to 8 bits per channel. The filter order is fixed when the
//! image is created.

use crate::Color;
use rayon::prelude::*;
use rayt_core::Tonemap;

/// A color-to-color transform applied before quantization.
pub trait ImageFilter: Send + Sync {
    fn filter(&self, color: Color) -> Color;
}

/// Gamma encoding: `c^(1/gamma)`. Negative components become 0.
#[derive(Debug, Clone, Copy)]
pub struct GammaFilter {
    inv_gamma: f32,
}

impl GammaFilter {
    pub fn new(gamma: f32) -> Self {
        Self {
            inv_gamma: 1.0 / gamma,
        }
    }
}

impl ImageFilter for GammaFilter {
    fn filter(&self, color: Color) -> Color {
        color.max(Color::ZERO).powf(self.inv_gamma)
    }
}

/// Clamp every component to [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampFilter;

impl ImageFilter for ClampFilter {
    fn filter(&self, color: Color) -> Color {
        color.clamp(Color::ZERO, Color::ONE)
    }
}

/// Reinhard tone curve `c / (1 + c)`, compressing [0, inf) into [0, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReinhardFilter;

impl ImageFilter for ReinhardFilter {
    fn filter(&self, color: Color) -> Color {
        let c = color.max(Color::ZERO);
        c / (Color::ONE + c)
    }
}

/// Ordered list of filters.
pub struct FilterChain {
    filters: Vec<Box<dyn ImageFilter>>,
}

impl FilterChain {
    /// A chain with no filters; colors are quantized as-is.
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a filter to the end of the chain.
    pub fn with(mut self, filter: impl ImageFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Gamma encoding followed by the given tone operator.
    pub fn for_display(gamma: f32, tonemap: Tonemap) -> Self {
        let chain = Self::empty().with(GammaFilter::new(gamma));
        match tonemap {
            Tonemap::Clamp => chain.with(ClampFilter),
            Tonemap::Reinhard => chain.with(ReinhardFilter).with(ClampFilter),
        }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in order.
    pub fn apply(&self, color: Color) -> Color {
        self.filters.iter().fold(color, |c, f| f.filter(c))
    }

    /// Filter and quantize to RGB8.
    #[inline]
    pub fn encode(&self, color: Color) -> [u8; 3] {
        let c = self.apply(color);
        [quantize(c.x), quantize(c.y), quantize(c.z)]
    }
}

impl Default for FilterChain {
    /// Gamma 2.2 followed by a clamp to [0, 1].
    fn default() -> Self {
        Self::for_display(2.2, Tonemap::Clamp)
    }
}

/// Map [0, 1] to [0, 255]. Out-of-range values saturate.
#[inline]
fn quantize(c: f32) -> u8 {
    (c * 255.99) as u8
}

/// Row-major RGB8 image, top row first.
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    filters: FilterChain,
}

impl Image {
    /// Create a black image with the default filter chain.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_filters(width, height, FilterChain::default())
    }

    /// Create a black image with an explicit filter chain.
    pub fn with_filters(width: u32, height: u32, filters: FilterChain) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
            filters,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Contiguous RGB8 bytes, `width * height * 3` long.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Filter, quantize and store a linear color at (x, y).
    pub fn write(&mut self, x: u32, y: u32, color: Color) {
        let rgb = self.filters.encode(color);
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Get the stored RGB8 value at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Split the image into disjoint row writers for parallel rendering.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = RowWriter<'_>> + '_ {
        let row_len = (self.width as usize * 3).max(1);
        let filters = &self.filters;
        self.pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .map(move |(y, pixels)| RowWriter {
                y: y as u32,
                pixels,
                filters,
            })
    }
}

/// Exclusive write access to a single row of an [`Image`].
pub struct RowWriter<'a> {
    y: u32,
    pixels: &'a mut [u8],
    filters: &'a FilterChain,
}

impl RowWriter<'_> {
    /// Row index, counting down from the top of the image.
    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        (self.pixels.len() / 3) as u32
    }

    /// Filter, quantize and store a linear color at column x.
    pub fn write(&mut self, x: u32, color: Color) {
        let rgb = self.filters.encode(color);
        let idx = x as usize * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_without_filters() {
        let mut image = Image::with_filters(2, 1, FilterChain::empty());
        image.write(0, 0, Color::new(1.0, 0.5, 0.0));
        image.write(1, 0, Color::new(2.0, -1.0, f32::NAN));

        assert_eq!(image.pixel(0, 0), [255, 127, 0]);
        assert_eq!(image.pixel(1, 0), [255, 0, 0]);
    }

    #[test]
    fn test_default_chain_gamma_then_clamp() {
        let mut image = Image::new(1, 1);
        image.write(0, 0, Color::new(0.5, 4.0, -2.0));

        // 0.5^(1/2.2) = 0.7297
        assert_eq!(image.pixel(0, 0), [186, 255, 0]);
    }

    #[test]
    fn test_filter_order_matters_above_one() {
        let color = Color::new(4.0, 2.0, 1.5);
        let gamma_first = FilterChain::empty()
            .with(GammaFilter::new(2.2))
            .with(ReinhardFilter);
        let tonemap_first = FilterChain::empty()
            .with(ReinhardFilter)
            .with(GammaFilter::new(2.2));

        assert_ne!(gamma_first.encode(color), tonemap_first.encode(color));
        // Tone mapping in linear space then encoding is brighter
        assert!(tonemap_first.encode(color)[0] > gamma_first.encode(color)[0]);
    }

    #[test]
    fn test_gamma_filter() {
        let gamma = GammaFilter::new(2.0);
        let c = gamma.filter(Color::new(0.25, 1.0, -1.0));
        assert!((c - Color::new(0.5, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_reinhard_filter() {
        let c = ReinhardFilter.filter(Color::new(1.0, 3.0, 0.0));
        assert!((c - Color::new(0.5, 0.75, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_for_display_chains() {
        assert_eq!(FilterChain::for_display(2.2, Tonemap::Clamp).len(), 2);
        assert_eq!(FilterChain::for_display(2.2, Tonemap::Reinhard).len(), 3);
        assert!(FilterChain::empty().is_empty());
    }

    #[test]
    fn test_row_writers_are_disjoint() {
        let mut image = Image::with_filters(3, 4, FilterChain::empty());
        image.par_rows_mut().for_each(|mut row| {
            let y = row.y();
            assert_eq!(row.width(), 3);
            for x in 0..3 {
                row.write(x, Color::splat(y as f32 / 10.0));
            }
        });

        for y in 0..4 {
            for x in 0..3 {
                let expected = (y as f32 / 10.0 * 255.99) as u8;
                assert_eq!(image.pixel(x, y), [expected; 3]);
            }
        }
        assert_eq!(image.pixels().len(), 36);
    }
}
