//! Axis-aligned rectangle primitive.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    GeometryError, Material,
};
use rayt_math::{Interval, Ray, Vec3};

/// Plane a rectangle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectAxis {
    /// Spans x and y at fixed z
    XY,
    /// Spans x and z at fixed y
    XZ,
    /// Spans y and z at fixed x
    YZ,
}

impl RectAxis {
    /// Component indices `(a, b, fixed)`: the two in-plane axes and the normal axis.
    #[inline]
    fn axes(self) -> (usize, usize, usize) {
        match self {
            RectAxis::XY => (0, 1, 2),
            RectAxis::XZ => (0, 2, 1),
            RectAxis::YZ => (1, 2, 0),
        }
    }

    /// Unit normal along the fixed axis.
    pub fn normal(self) -> Vec3 {
        match self {
            RectAxis::XY => Vec3::Z,
            RectAxis::XZ => Vec3::Y,
            RectAxis::YZ => Vec3::X,
        }
    }
}

/// A rectangle `[a0, a1] x [b0, b1]` in the plane `fixed axis = k`.
///
/// The normal always points along the positive fixed axis; wrap in
/// [`FlipNormals`](crate::FlipNormals) to face the other way.
pub struct Rect {
    axis: RectAxis,
    a0: f32,
    a1: f32,
    b0: f32,
    b1: f32,
    k: f32,
    material: Arc<dyn Material>,
}

impl Rect {
    /// Create a new rectangle. Bounds must satisfy `a0 < a1` and `b0 < b1`.
    pub fn new(
        axis: RectAxis,
        (a0, a1): (f32, f32),
        (b0, b1): (f32, f32),
        k: f32,
        material: Arc<dyn Material>,
    ) -> Result<Self, GeometryError> {
        if !(a0 < a1 && b0 < b1) {
            return Err(GeometryError::InvalidBounds { a0, a1, b0, b1 });
        }

        Ok(Self {
            axis,
            a0,
            a1,
            b0,
            b1,
            k,
            material,
        })
    }

    pub fn xy(x: (f32, f32), y: (f32, f32), z: f32, material: Arc<dyn Material>) -> Result<Self, GeometryError> {
        Self::new(RectAxis::XY, x, y, z, material)
    }

    pub fn xz(x: (f32, f32), z: (f32, f32), y: f32, material: Arc<dyn Material>) -> Result<Self, GeometryError> {
        Self::new(RectAxis::XZ, x, z, y, material)
    }

    pub fn yz(y: (f32, f32), z: (f32, f32), x: f32, material: Arc<dyn Material>) -> Result<Self, GeometryError> {
        Self::new(RectAxis::YZ, y, z, x, material)
    }
}

impl Hittable for Rect {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let (a, b, c) = self.axis.axes();
        let origin = ray.origin();
        let direction = ray.direction();

        // Ray is parallel to the plane
        if direction[c].abs() < 1e-8 {
            return None;
        }

        let t = (self.k - origin[c]) / direction[c];
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        let (pa, pb) = (p[a], p[b]);
        if pa < self.a0 || pa > self.a1 || pb < self.b0 || pb > self.b1 {
            return None;
        }

        Some(HitRecord {
            p,
            normal: self.axis.normal(),
            material: self.material.as_ref(),
            u: (pa - self.a0) / (self.a1 - self.a0),
            v: (pb - self.b0) / (self.b1 - self.b0),
            t,
        })
    }
}
