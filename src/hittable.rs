//! Ray-scene intersection.
//!
//! Defines the [`Hittable`] trait for anything a ray can strike, the
//! [`HitRecord`] it yields, and the flat sphere [`Scene`].

use glam::Vec3A;
use crate::ray::Ray;
use crate::interval::Interval;
use crate::sphere::Sphere;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Ray-object intersection information.
///
/// Only produced for actual hits; a miss is `None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Unit surface normal, always facing back towards the ray origin
    pub normal: Vec3A,
    /// Reflectance tint of the surface
    pub color: Color,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) since pixels are traced in parallel
/// against a shared, read-only scene.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Flat, ordered list of spheres.
///
/// Order matters: when two spheres are hit at exactly the same distance the
/// one stored first wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Spheres in scan order
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { spheres: Vec::new() }
    }

    /// Create a scene from an ordered sphere list.
    pub fn from_spheres(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// Append a sphere; it loses ties against everything already present.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// True if the scene has no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Nearest hit over all spheres.
    ///
    /// Every sphere is tested against the full window; a later hit replaces
    /// the current best only when strictly closer.
    pub fn intersect_ray(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(r, ray_t) {
                if closest.map_or(true, |best| rec.t < best.t) {
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

impl From<Vec<Sphere>> for Scene {
    fn from(spheres: Vec<Sphere>) -> Self {
        Self::from_spheres(spheres)
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.intersect_ray(r, ray_t)
    }
}
