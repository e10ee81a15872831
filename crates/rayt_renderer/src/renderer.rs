//! Core path tracing estimator.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a hard depth cutoff
//! - Anti-aliasing via jittered multi-sampling

use crate::sampling::gen_f32;
use crate::{Background, Color, Hittable, Scene};
use rand::RngCore;
use rayt_core::RenderSettings;
use rayt_math::{Interval, Ray};

/// Default maximum number of scatter events along a path.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Minimum hit distance, keeps scattered rays from re-hitting their origin.
pub const SELF_INTERSECTION_EPSILON: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for the per-row random streams
    pub seed: u64,
    /// Worker threads, `None` for the rayon default
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: 0,
            threads: None,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
            seed: settings.seed,
            threads: settings.threads,
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. On a hit the material's
/// emission is added to the attenuated color of the scattered ray, as long
/// as `depth < max_depth` and the material scatters. Absorbed or
/// depth-limited paths return only the emission.
///
/// The depth cutoff is a hard stop, not Russian roulette, so light carried
/// by paths longer than `max_depth` is lost. At most `max_depth + 1` nested
/// calls happen for any scene.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    background: &Background,
    depth: u32,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let rec = match world.hit(ray, Interval::new(SELF_INTERSECTION_EPSILON, f32::INFINITY)) {
        Some(rec) => rec,
        None => return background.color(ray),
    };

    // Get emission from material (for lights)
    let emitted = rec.material.emitted(ray, &rec);

    if depth >= max_depth {
        return emitted;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(scatter) => {
            let incoming = ray_color(&scatter.scattered, world, background, depth + 1, max_depth, rng);
            emitted + scatter.attenuation * incoming
        }
        None => emitted,
    }
}

/// Render a single pixel with multi-sampling.
///
/// `(x, y)` are buffer coordinates with `y = 0` at the top row. Each sample
/// jitters the ray uniformly inside the pixel footprint.
///
/// The pixel must lie inside `config`'s resolution and `config` must ask
/// for at least one sample; [`render`](crate::render) checks both before
/// tracing.
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    debug_assert!(
        x < config.width && y < config.height,
        "pixel ({}, {}) outside {}x{}",
        x,
        y,
        config.width,
        config.height
    );
    debug_assert!(config.samples_per_pixel > 0, "no samples per pixel");

    let width = config.width as f32;
    let height = config.height as f32;
    // Screen v grows upward, buffer rows grow downward
    let j = (config.height - 1 - y) as f32;
    let i = x as f32;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let u = (i + gen_f32(rng)) / width;
        let v = (j + gen_f32(rng)) / height;
        let ray = scene.camera.get_ray(u, v);
        pixel_color += ray_color(
            &ray,
            scene.world.as_ref(),
            &scene.background,
            0,
            config.max_depth,
            rng,
        );
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}
