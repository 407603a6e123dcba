//! Rays traced through the sphere scene.
//!
//! A ray is r(t) = origin + t * direction. Primary rays come out of
//! [`Camera::get_ray`](crate::camera::Camera::get_ray) with a unit direction;
//! bounce rays keep unit length because mirror reflection preserves it.

use glam::Vec3A;

/// Ray in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a hit point nudged off the
    /// surface for reflected rays.
    pub origin: Vec3A,

    /// Direction of travel.
    ///
    /// Intersection math does not assume unit length, but the tracer
    /// normalizes before the first bounce.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
