// Re-export glam for convenience
pub use glam::*;

// rayt math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// RGB color in linear space. Components are unbounded above.
pub type Color = Vec3;

/// Linear interpolation between `a` (t = 0) and `b` (t = 1).
#[inline]
pub fn lerp(t: f32, a: Vec3, b: Vec3) -> Vec3 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_lerp_endpoints() {
        let white = Color::ONE;
        let blue = Color::new(0.5, 0.7, 1.0);

        assert_eq!(lerp(0.0, white, blue), white);
        assert_eq!(lerp(1.0, white, blue), blue);
        assert_eq!(lerp(0.5, Vec3::ZERO, Vec3::splat(2.0)), Vec3::ONE);
    }
}
