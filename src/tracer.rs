//! Mirror-only light transport.
//!
//! [`trace`] runs a bounded loop: each round either reflects off the nearest
//! sphere, tinting the throughput, or escapes to the [`skybox`] and stops.

use glam::Vec3A;

use crate::camera::Camera;
use crate::hittable::{Color, HitRecord, Scene};
use crate::ray::Ray;

/// Sky color straight up.
pub const SKY_UP: Color = Vec3A::new(0.5, 0.7, 1.0);

/// Sky color straight down.
pub const SKY_DOWN: Color = Vec3A::new(1.0, 1.0, 1.0);

/// Vertical gradient background.
///
/// Expects a unit direction; the y component is remapped from [-1, 1] to
/// [0, 1] and used to blend from [`SKY_DOWN`] to [`SKY_UP`].
pub fn skybox(r: &Ray) -> Color {
    let a = 0.5 * (r.direction.y + 1.0);
    (1.0 - a) * SKY_DOWN + a * SKY_UP
}

/// Reflect `v` about the unit normal `n`.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Light emitted by a surface. Spheres never glow.
pub fn emitted_light(_rec: &HitRecord) -> Color {
    Color::ZERO
}

/// Light arriving along `ray` after at most `camera.max_bounces` rounds.
///
/// If the budget runs out while still bouncing, whatever has been gathered
/// so far is returned; the unresolved ray adds nothing. A zero direction
/// hits nothing and sees the horizon.
pub fn trace(ray: Ray, camera: &Camera, scene: &Scene) -> Color {
    let window = camera.distance_window();

    let mut ray = Ray::new(ray.origin, ray.direction.normalize_or_zero());
    let mut throughput = Color::ONE;
    let mut incoming_light = Color::ZERO;

    for _ in 0..camera.max_bounces {
        match scene.intersect_ray(&ray, window) {
            Some(rec) => {
                ray = Ray::new(
                    rec.p + rec.normal * camera.min_distance,
                    reflect(ray.direction, rec.normal),
                );
                incoming_light += emitted_light(&rec) * throughput;
                throughput *= rec.color;
            }
            None => {
                incoming_light += skybox(&ray) * throughput;
                break;
            }
        }
    }

    incoming_light
}
