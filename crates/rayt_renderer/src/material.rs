//! Material trait for surface scattering.

use std::sync::Arc;

use crate::sampling::{gen_f32, random_in_unit_sphere};
use crate::texture::{SolidColor, Texture};
use crate::{hittable::HitRecord, Color, GeometryError};
use rand::RngCore;
use rayt_math::{Ray, Vec3};

/// Outgoing ray and its throughput weight from a successful scatter.
#[derive(Debug, Clone, Copy)]
pub struct ScatterRecord {
    pub scattered: Ray,
    pub attenuation: Color,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord>;

    /// Get emitted light from this material.
    ///
    /// Most materials return black (no emission).
    fn emitted(&self, _ray_in: &Ray, _rec: &HitRecord) -> Color {
        Color::ZERO
    }
}

/// Lambertian (diffuse) material.
pub struct Lambertian {
    albedo: Arc<dyn Texture>,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo texture.
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }

    /// Lambertian with a constant albedo.
    pub fn solid(albedo: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(albedo)))
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let mut scatter_direction = rec.normal + random_in_unit_sphere(rng);

        // Catch degenerate scatter direction
        if scatter_direction.length_squared() < 1e-8 {
            scatter_direction = rec.normal;
        }

        Some(ScatterRecord {
            scattered: Ray::new(rec.p, scatter_direction),
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
        })
    }
}

/// Metal (specular) material.
pub struct Metal {
    albedo: Arc<dyn Texture>,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Arc<dyn Texture>, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn solid(albedo: Color, fuzz: f32) -> Self {
        Self::new(Arc::new(SolidColor::new(albedo)), fuzz)
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Rays fuzzed below the surface are absorbed
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterRecord {
                scattered: Ray::new(rec.p, scattered_dir),
                attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Result<Self, GeometryError> {
        if ior.is_nan() || ior <= 0.0 {
            return Err(GeometryError::InvalidIor(ior));
        }
        Ok(Self { ior })
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let unit_direction = ray_in.direction().normalize();
        let d_dot_n = unit_direction.dot(rec.normal);

        // The stored normal points out of the object, so its sign against the
        // ray tells us whether we are leaving or entering the medium.
        let (outward_normal, ratio, cos_incident) = if d_dot_n > 0.0 {
            (-rec.normal, self.ior, d_dot_n)
        } else {
            (rec.normal, 1.0 / self.ior, -d_dot_n)
        };

        // One draw per call, whether or not refraction is possible
        let draw = gen_f32(rng);

        let direction = match refract(unit_direction, outward_normal, ratio) {
            Some(refracted) => {
                // Schlick uses the angle on the less dense side of the interface
                let cosine = if d_dot_n > 0.0 {
                    (1.0 - ratio * ratio * (1.0 - cos_incident * cos_incident)).sqrt()
                } else {
                    cos_incident
                };
                if draw < schlick(cosine, self.ior) {
                    reflect(unit_direction, rec.normal)
                } else {
                    refracted
                }
            }
            // Total internal reflection
            None => reflect(unit_direction, rec.normal),
        };

        Some(ScatterRecord {
            scattered: Ray::new(rec.p, direction),
            attenuation: Color::ONE,
        })
    }
}

/// Diffuse light emitter.
pub struct DiffuseLight {
    emit: Arc<dyn Texture>,
}

impl DiffuseLight {
    /// Create a new diffuse light with the given emission texture.
    pub fn new(emit: Arc<dyn Texture>) -> Self {
        Self { emit }
    }

    pub fn solid(emit: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(emit)))
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        None
    }

    fn emitted(&self, _ray_in: &Ray, rec: &HitRecord) -> Color {
        self.emit.value(rec.u, rec.v, rec.p)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface with unit normal `n` facing the
/// incoming side.
///
/// Returns `None` when refraction is impossible (total internal reflection).
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for Fresnel reflectance.
pub fn schlick(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
