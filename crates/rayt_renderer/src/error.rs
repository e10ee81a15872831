//! Construction and render errors.

use thiserror::Error;

/// Invalid parameters passed to a shape, material or camera constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("rect bounds must satisfy min < max, got [{a0}, {a1}] x [{b0}, {b1}]")]
    InvalidBounds { a0: f32, a1: f32, b0: f32, b1: f32 },

    #[error("index of refraction must be positive, got {0}")]
    InvalidIor(f32),

    #[error("camera up vector is parallel to the view direction")]
    DegenerateCamera,
}

/// Errors raised by the render driver before any pixel is traced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("samples per pixel must be at least 1")]
    NoSamples,

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
