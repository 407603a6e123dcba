//! Sphere primitive placed by a motor.
//!
//! Implements analytic ray-sphere intersection with the half-b form of the
//! quadratic formula.

use glam::Vec3A;
use crate::ray::Ray;
use crate::hittable::{Color, Hittable, HitRecord};
use crate::interval::Interval;
use crate::motor::Motor;

/// Squared direction length below which a ray is treated as degenerate.
const DEGENERATE_DIRECTION: f32 = 1e-12;

/// Sphere defined by a placement motor, tint, and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Placement of the sphere's local origin.
    ///
    /// Only the translation matters for intersection; the orientation is
    /// carried along so textured spheres could use it later.
    pub transform: Motor,

    /// Reflectance tint in [0, 1] per channel.
    pub color: Color,

    /// Radius; callers must keep it positive.
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(transform: Motor, color: Color, radius: f32) -> Self {
        Self {
            transform,
            color,
            radius,
        }
    }

    /// World-space center: the local origin pushed through the motor.
    pub fn center(&self) -> Vec3A {
        self.transform.transform_point(Vec3A::ZERO)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let center = self.center();

        let a = r.direction.length_squared();
        if a < DEGENERATE_DIRECTION {
            return None;
        }

        let oc = r.origin - center;
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-half_b - sqrtd) / a;
        let far = (-half_b + sqrtd) / a;

        // The near root sits behind the bias when the origin is inside the
        // sphere or resting on its surface.
        let t = if near > ray_t.min { near } else { far };
        if !ray_t.contains(t) {
            return None;
        }

        let p = r.at(t);
        let mut normal = (p - center).normalize();
        if normal.dot(r.origin - p) < 0.0 {
            normal = -normal;
        }

        Some(HitRecord {
            t,
            p,
            normal,
            color: self.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Interval {
        Interval::new(0.001, 1000.0)
    }

    fn assert_near(actual: Vec3A, expected: Vec3A) {
        assert!(
            (actual - expected).abs().max_element() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn canonical_hit() {
        let sphere = Sphere::new(Motor::IDENTITY, Color::new(0.9, 0.5, 0.1), 1.0);
        let r = Ray::new(Vec3A::new(0.0, 0.0, -3.0), Vec3A::new(0.0, 0.0, 1.0));

        let rec = sphere.hit(&r, window()).expect("ray aimed at the sphere");
        assert!((rec.t - 2.0).abs() < 1e-6);
        assert_near(rec.p, Vec3A::new(0.0, 0.0, -1.0));
        assert_near(rec.normal, Vec3A::new(0.0, 0.0, -1.0));
        assert_eq!(rec.color, Color::new(0.9, 0.5, 0.1));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let sphere = Sphere::new(Motor::translation(Vec3A::new(0.0, 0.0, 5.0)), Color::ONE, 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&r, window()).is_none());
    }

    #[test]
    fn center_follows_motor() {
        let sphere = Sphere::new(
            Motor::rotation_xz(0.3).then(Motor::translation(Vec3A::new(2.0, -1.0, 4.0))),
            Color::ONE,
            0.5,
        );
        assert_near(sphere.center(), Vec3A::new(2.0, -1.0, 4.0));
    }

    #[test]
    fn inside_sphere_uses_far_root_and_inward_normal() {
        let sphere = Sphere::new(Motor::IDENTITY, Color::ONE, 2.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::X);

        let rec = sphere.hit(&r, window()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-6);
        assert_near(rec.normal, -Vec3A::X);
    }

    #[test]
    fn hit_beyond_max_distance_is_a_miss() {
        let sphere = Sphere::new(Motor::translation(Vec3A::new(0.0, 0.0, 50.0)), Color::ONE, 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::Z);
        assert!(sphere.hit(&r, Interval::new(0.001, 10.0)).is_none());
        assert!(sphere.hit(&r, window()).is_some());
    }

    #[test]
    fn sphere_behind_origin_is_a_miss() {
        let sphere = Sphere::new(Motor::translation(Vec3A::new(0.0, 0.0, -5.0)), Color::ONE, 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::Z);
        assert!(sphere.hit(&r, window()).is_none());
    }

    #[test]
    fn zero_direction_is_a_miss() {
        let sphere = Sphere::new(Motor::IDENTITY, Color::ONE, 1.0);
        let r = Ray::new(Vec3A::new(0.0, 0.0, -3.0), Vec3A::ZERO);
        assert!(sphere.hit(&r, window()).is_none());
    }

    #[test]
    fn biased_origin_on_surface_skips_self() {
        let sphere = Sphere::new(Motor::IDENTITY, Color::ONE, 1.0);
        // Leaving the surface outward: both roots are behind or at the bias.
        let r = Ray::new(Vec3A::new(0.0, 0.0, -1.001), -Vec3A::Z);
        assert!(sphere.hit(&r, window()).is_none());
    }

    #[test]
    fn unnormalized_direction_reports_parameter_distance() {
        let sphere = Sphere::new(Motor::IDENTITY, Color::ONE, 1.0);
        let r = Ray::new(Vec3A::new(0.0, 0.0, -3.0), Vec3A::new(0.0, 0.0, 2.0));
        let rec = sphere.hit(&r, window()).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-6);
        assert_near(rec.p, Vec3A::new(0.0, 0.0, -1.0));
    }
}
