//! Scan-line parallel render driver.
//!
//! Each image row is an independent unit of work handed to a fixed-size
//! rayon pool. Rows draw from their own random stream seeded by
//! `(seed, row)`, so the output does not depend on thread count or
//! scheduling order.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::image::{FilterChain, Image};
use crate::renderer::{render_pixel, RenderConfig};
use crate::sampling::row_rng;
use crate::{Color, RenderError, Scene};

/// Summary of a finished render.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Rows that panicked and were left black, in ascending order
    pub failed_rows: Vec<u32>,
    /// Wall-clock time spent tracing
    pub elapsed: Duration,
}

/// A rendered image and its stats.
pub struct RenderOutput {
    pub image: Image,
    pub stats: RenderStats,
}

/// Trace every pixel of row `y` (0 = top) into linear colors.
pub fn render_row(scene: &Scene, y: u32, config: &RenderConfig) -> Vec<Color> {
    let mut rng = row_rng(config.seed, y);
    (0..config.width)
        .map(|x| render_pixel(scene, x, y, config, &mut rng))
        .collect()
}

/// Render the whole scene into a new image written through `filters`.
///
/// A row that panics is logged and left black; the other rows are
/// unaffected.
pub fn render(
    scene: &Scene,
    config: &RenderConfig,
    filters: FilterChain,
) -> Result<RenderOutput, RenderError> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::InvalidResolution {
            width: config.width,
            height: config.height,
        });
    }
    if config.samples_per_pixel == 0 {
        return Err(RenderError::NoSamples);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .thread_name(|i| format!("rayt-row-{}", i))
        .build()?;

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} threads",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        pool.current_num_threads()
    );

    let start = Instant::now();
    let mut image = Image::with_filters(config.width, config.height, filters);
    let rows_done = AtomicU32::new(0);

    let failed_rows: Vec<u32> = pool.install(|| {
        image
            .par_rows_mut()
            .filter_map(|mut row| {
                let y = row.y();
                let traced = panic::catch_unwind(AssertUnwindSafe(|| render_row(scene, y, config)));

                let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                log::debug!(
                    "Rendering (y = {}) {:.1}%",
                    y,
                    100.0 * done as f32 / config.height as f32
                );

                match traced {
                    Ok(colors) => {
                        for (x, color) in colors.into_iter().enumerate() {
                            row.write(x as u32, color);
                        }
                        None
                    }
                    Err(payload) => {
                        log::error!("Row {} failed: {}", y, panic_message(payload.as_ref()));
                        Some(y)
                    }
                }
            })
            .collect()
    });

    let elapsed = start.elapsed();
    if failed_rows.is_empty() {
        log::info!("Rendered in {:?}", elapsed);
    } else {
        log::warn!(
            "Rendered in {:?} with {} failed rows",
            elapsed,
            failed_rows.len()
        );
    }

    Ok(RenderOutput {
        image,
        stats: RenderStats {
            failed_rows,
            elapsed,
        },
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
