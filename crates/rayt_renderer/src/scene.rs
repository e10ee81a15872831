//! Everything the driver needs to render one image.

use crate::{Camera, Color, Hittable};
use rayt_math::{lerp, Ray};

/// Radiance for rays that escape the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Background {
    /// Same color in every direction
    Solid(Color),
    /// Vertical gradient from white looking down to sky blue overhead
    #[default]
    Sky,
}

impl Background {
    /// Radiance arriving along a ray that hit nothing.
    pub fn color(&self, ray: &Ray) -> Color {
        match self {
            Background::Solid(color) => *color,
            Background::Sky => {
                let unit_direction = ray.direction().normalize();
                let t = 0.5 * (unit_direction.y + 1.0);
                lerp(t, Color::ONE, Color::new(0.5, 0.7, 1.0))
            }
        }
    }
}

/// A world, a camera and a background.
///
/// Read-only for the whole render and shared by all worker threads.
pub struct Scene {
    pub world: Box<dyn Hittable>,
    pub camera: Camera,
    pub background: Background,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("camera", &self.camera)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

impl Scene {
    pub fn new(world: impl Hittable + 'static, camera: Camera, background: Background) -> Self {
        Self {
            world: Box::new(world),
            camera,
            background,
        }
    }
}
