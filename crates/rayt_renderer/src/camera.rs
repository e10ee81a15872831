//! Pinhole camera for ray generation.

use crate::GeometryError;
use rayt_math::{Ray, Vec3};

/// Pinhole camera spanning an image plane.
///
/// `get_ray(u, v)` maps normalized screen coordinates to a ray from the
/// origin through `lower_left_corner + u * horizontal + v * vertical`, with
/// `(0, 0)` at the bottom-left of the image and `(1, 1)` at the top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Vec3,
}

impl Camera {
    /// Create a camera directly from its image plane vectors.
    pub fn new(origin: Vec3, horizontal: Vec3, vertical: Vec3, lower_left_corner: Vec3) -> Self {
        Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Create a camera looking from `look_from` towards `look_at`.
    ///
    /// - `vup`: world up, must not be parallel to the view direction
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width over height
    pub fn look_at(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect: f32,
    ) -> Result<Self, GeometryError> {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Calculate camera basis vectors
        let w = (look_from - look_at).normalize_or_zero();
        let u = vup.cross(w);
        if w == Vec3::ZERO || u.length_squared() < 1e-12 {
            return Err(GeometryError::DegenerateCamera);
        }
        let u = u.normalize();
        let v = w.cross(u);

        let lower_left_corner = look_from - half_width * u - half_height * v - w;

        Ok(Self {
            origin: look_from,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
            lower_left_corner,
        })
    }

    /// Generate the ray through normalized screen position `(u, v)`.
    #[inline]
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }
}

impl Default for Camera {
    /// A 2:1 image plane one unit in front of the origin, looking down -Z.
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(-2.0, -1.0, -1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_rays() {
        let camera = Camera::default();

        let center = camera.get_ray(0.5, 0.5);
        assert_eq!(center.origin(), Vec3::ZERO);
        assert_eq!(center.direction(), Vec3::new(0.0, 0.0, -1.0));

        let corner = camera.get_ray(0.0, 0.0);
        assert_eq!(corner.direction(), Vec3::new(-2.0, -1.0, -1.0));

        let top_right = camera.get_ray(1.0, 1.0);
        assert_eq!(top_right.direction(), Vec3::new(2.0, 1.0, -1.0));
    }

    #[test]
    fn test_look_at_center_ray() {
        let from = Vec3::new(3.0, 3.0, 2.0);
        let at = Vec3::new(0.0, 0.0, -1.0);
        let camera = Camera::look_at(from, at, Vec3::Y, 40.0, 2.0).unwrap();

        let ray = camera.get_ray(0.5, 0.5);
        assert_eq!(ray.origin(), from);
        let expected = (at - from).normalize();
        assert!((ray.direction().normalize() - expected).length() < 1e-5);
    }

    #[test]
    fn test_look_at_field_of_view() {
        let camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 1.0).unwrap();

        // 90 degree fov: top edge is 45 degrees up
        let top = camera.get_ray(0.5, 1.0).direction();
        assert!((top - Vec3::new(0.0, 1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_look_at_degenerate_up() {
        let result = Camera::look_at(Vec3::ZERO, Vec3::new(0.0, -5.0, 0.0), Vec3::Y, 60.0, 1.0);
        assert_eq!(result, Err(GeometryError::DegenerateCamera));
    }
}
