//! Pinhole camera placed by a motor.
//!
//! The camera looks down its local +x axis with +y up and +z to the right of
//! the image. World placement comes entirely from `transform`.

use glam::Vec3A;
use std::f32::consts::FRAC_PI_2;

use crate::interval::Interval;
use crate::motor::Motor;
use crate::ray::Ray;

/// Camera for primary ray generation.
///
/// Contract, unchecked: `transform` is unit-normalized, `vfov > 0`,
/// `0 < min_distance < max_distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Placement of the eye in world space
    pub transform: Motor,
    /// Vertical field of view in radians
    pub vfov: f32,
    /// Nearest accepted hit distance, doubling as the surface bias for bounces
    pub min_distance: f32,
    /// Farthest accepted hit distance
    pub max_distance: f32,
    /// Maximum number of intersection rounds per pixel
    pub max_bounces: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a camera at the origin with a 90° vertical field of view,
    /// distance window [0.001, 100] and 8 bounces.
    pub fn new() -> Self {
        Self {
            transform: Motor::IDENTITY,
            vfov: FRAC_PI_2,
            min_distance: 0.001,
            max_distance: 100.0,
            max_bounces: 8,
        }
    }

    /// Hit-distance window rays from this camera accept.
    pub fn distance_window(&self) -> Interval {
        Interval::new(self.min_distance, self.max_distance)
    }

    /// Eye position in world space.
    pub fn origin(&self) -> Vec3A {
        self.transform.transform_point(Vec3A::ZERO)
    }

    /// Camera-space direction through pixel (x, y) of a `width` x `height` image.
    ///
    /// Pixel rows grow downwards, so row 0 maps to the top of the view.
    pub fn local_direction(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3A {
        let width = width as f32;
        let height = height as f32;

        let u = (x as f32 / width) * 2.0 - 1.0;
        let v = (1.0 - y as f32 / height) * 2.0 - 1.0;

        let aspect = width / height;
        let half_height = (self.vfov * 0.5).tan();

        Vec3A::new(1.0, v * half_height, u * aspect * half_height)
    }

    /// World-space primary ray through pixel (x, y), with unit direction.
    pub fn get_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let local = self.local_direction(x, y, width, height);
        let direction = self.transform.transform_direction(local).normalize();
        Ray::new(self.origin(), direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(actual: Vec3A, expected: Vec3A) {
        assert!(
            (actual - expected).abs().max_element() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn center_pixel_looks_forward() {
        let camera = Camera::new();
        let r = camera.get_ray(50, 50, 100, 100);
        assert_near(r.origin, Vec3A::ZERO);
        assert_near(r.direction, Vec3A::X);
    }

    #[test]
    fn top_left_pixel_looks_up_and_left() {
        let camera = Camera::new();
        // 90° vertical fov gives tan(45°) = 1; aspect 2.
        let local = camera.local_direction(0, 0, 200, 100);
        assert_near(local, Vec3A::new(1.0, 1.0, -2.0));
    }

    #[test]
    fn rows_grow_downwards() {
        let camera = Camera::new();
        let top = camera.get_ray(50, 10, 100, 100);
        let bottom = camera.get_ray(50, 90, 100, 100);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn directions_are_unit_length() {
        let camera = Camera {
            transform: Motor::rotation_xy(0.4).then(Motor::translation(Vec3A::new(1.0, 2.0, 3.0))),
            ..Camera::new()
        };
        for (x, y) in [(0, 0), (13, 77), (99, 99)] {
            let r = camera.get_ray(x, y, 100, 100);
            assert!((r.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn transform_moves_origin_but_not_direction_offset() {
        let camera = Camera {
            transform: Motor::translation(Vec3A::new(-3.0, 0.0, 0.0)),
            ..Camera::new()
        };
        let r = camera.get_ray(50, 50, 100, 100);
        assert_near(r.origin, Vec3A::new(-3.0, 0.0, 0.0));
        assert_near(r.direction, Vec3A::X);
    }

    #[test]
    fn rotation_turns_view() {
        let camera = Camera {
            transform: Motor::rotation_xz(FRAC_PI_2),
            ..Camera::new()
        };
        let r = camera.get_ray(50, 50, 100, 100);
        assert_near(r.direction, Vec3A::Z);
    }

    #[test]
    fn window_mirrors_distances() {
        let camera = Camera {
            min_distance: 0.5,
            max_distance: 20.0,
            ..Camera::new()
        };
        assert_eq!(camera.distance_window(), Interval::new(0.5, 20.0));
    }
}
