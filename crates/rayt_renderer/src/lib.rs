//! rayt renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over analytic shapes: spheres and
//! axis-aligned rectangles with diffuse, metal, glass and emissive
//! materials. Rows render in parallel on a rayon pool and are written
//! through a tone filter chain into an RGB8 image.

mod camera;
mod error;
mod hittable;
mod image;
mod material;
mod rect;
mod renderer;
mod sampling;
mod scanline;
mod scene;
mod sphere;
mod texture;

pub use camera::Camera;
pub use error::{GeometryError, RenderError};
pub use hittable::{FlipNormals, HitRecord, Hittable, HittableList};
pub use image::{ClampFilter, FilterChain, GammaFilter, Image, ImageFilter, ReinhardFilter, RowWriter};
pub use material::{reflect, refract, schlick, Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterRecord};
pub use rect::{Rect, RectAxis};
pub use renderer::{ray_color, render_pixel, RenderConfig, DEFAULT_MAX_DEPTH, SELF_INTERSECTION_EPSILON};
pub use sampling::{gen_f32, random_in_unit_sphere, row_rng};
pub use scanline::{render, render_row, RenderOutput, RenderStats};
pub use scene::{Background, Scene};
pub use sphere::Sphere;
pub use texture::{CheckerTexture, ImageTexture, SolidColor, Texture};

/// Re-export Vec3 and common math types from rayt_math
pub use rayt_math::{Color, Interval, Ray, Vec3};
