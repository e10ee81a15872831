//! Sphere primitive for ray tracing.

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    GeometryError, Material,
};
use rayt_math::{Interval, Ray, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Result<Self, GeometryError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn get_sphere_uv(p: Vec3) -> (f32, f32) {
        // phi: angle around Y axis from +X
        // theta: latitude from the equator
        let phi = p.z.atan2(p.x);
        let theta = p.y.clamp(-1.0, 1.0).asin();

        let u = 1.0 - (phi + PI) / (2.0 * PI);
        let v = (theta + FRAC_PI_2) / PI;
        (u, v)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        // Tangent rays (zero discriminant) count as misses
        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let normal = (p - self.center) / self.radius;
        let (u, v) = Self::get_sphere_uv(normal);

        Some(HitRecord {
            p,
            normal,
            material: self.material.as_ref(),
            u,
            v,
            t: root,
        })
    }
}
