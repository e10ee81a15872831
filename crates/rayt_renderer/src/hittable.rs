//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use rayt_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Only exists for an actual hit, so every field is meaningful.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing out of the object
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Surface coordinates in [0, 1]
    pub u: f32,
    pub v: f32,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("u", &self.u)
            .field("v", &self.v)
            .field("t", &self.t)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the closest intersection with `t` strictly inside `ray_t`.
    ///
    /// Degenerate cases (tangent rays, rays parallel to a plane) are misses.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// An ordered list of hittable objects.
///
/// Not geometry itself: a hit test scans every child and keeps the nearest
/// hit, passing the closest `t` so far as the upper bound to the next child.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Box<dyn Hittable>> for HittableList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Hittable>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let closest_so_far = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

/// Wrapper that reverses the normal of the shape it holds.
///
/// Used for walls seen from inside (a Cornell box) and for hollow
/// dielectric shells.
pub struct FlipNormals<H: Hittable> {
    inner: H,
}

impl<H: Hittable> FlipNormals<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Hittable> Hittable for FlipNormals<H> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        self.inner.hit(ray, ray_t).map(|rec| HitRecord {
            normal: -rec.normal,
            ..rec
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use std::sync::Arc;

    fn sphere_at(z: f32) -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, z),
            0.5,
            Arc::new(Lambertian::solid(Vec3::splat(0.5))),
        )
        .unwrap()
    }

    fn permutations(n: usize) -> Vec<Vec<usize>> {
        if n == 0 {
            return vec![Vec::new()];
        }
        let mut out = Vec::new();
        for rest in permutations(n - 1) {
            for i in 0..=rest.len() {
                let mut p = rest.clone();
                p.insert(i, n - 1);
                out.push(p);
            }
        }
        out
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(list.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_list_matches_minimum_of_children_in_any_order() {
        let depths = [-5.0, -2.0, -8.0];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let interval = Interval::new(0.001, f32::INFINITY);

        let expected = depths
            .iter()
            .filter_map(|&z| sphere_at(z).hit(&ray, interval).map(|rec| rec.t))
            .fold(f32::INFINITY, f32::min);
        assert!((expected - 1.5).abs() < 1e-5);

        for order in permutations(depths.len()) {
            let list: HittableList = order
                .iter()
                .map(|&i| Box::new(sphere_at(depths[i])) as Box<dyn Hittable>)
                .collect();
            let rec = list.hit(&ray, interval).expect("list should hit");
            assert_eq!(rec.t, expected, "order {:?}", order);
        }
    }

    #[test]
    fn test_list_respects_interval_max() {
        let mut list = HittableList::new();
        list.add(sphere_at(-5.0));
        assert_eq!(list.len(), 1);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(list.hit(&ray, Interval::new(0.001, 4.0)).is_none());
        assert!(list.hit(&ray, Interval::new(0.001, 5.0)).is_some());
    }

    #[test]
    fn test_flip_normals() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let interval = Interval::new(0.001, f32::INFINITY);

        let sphere = sphere_at(-2.0);
        let wrapped = FlipNormals::new(sphere_at(-2.0));

        let plain = sphere.hit(&ray, interval).unwrap();
        let flipped = wrapped.hit(&ray, interval).unwrap();

        assert_eq!(flipped.normal, -plain.normal);
        assert_eq!(flipped.t, plain.t);
        assert_eq!(flipped.p, plain.p);
    }
}
