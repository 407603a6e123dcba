//! Per-frame sphere motion.

use glam::Vec3A;

use crate::hittable::Scene;
use crate::motor::Motor;
use crate::sphere::Sphere;

/// How a sphere moves over time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    /// Stays where it was authored.
    #[default]
    Static,
    /// Loops around the origin, replacing the authored placement.
    Spiral,
}

/// Position on the spiral path at `time` seconds.
pub fn spiral_position(time: f32) -> Vec3A {
    let phase = time * 2.0;
    Vec3A::new(phase.sin(), (phase * 0.33).cos() * 2.0, phase.cos())
}

impl Motion {
    /// Placement of a sphere following this motion at `time`.
    pub fn transform_at(self, authored: Motor, time: f32) -> Motor {
        match self {
            Motion::Static => authored,
            Motion::Spiral => Motor::translation(spiral_position(time)),
        }
    }
}

/// A sphere together with its motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedSphere {
    /// Sphere as authored
    pub sphere: Sphere,
    /// Motion applied on top of the authored placement
    pub motion: Motion,
}

/// Ordered sphere list that can be frozen at any instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatedScene {
    /// Spheres in scan order
    pub spheres: Vec<AnimatedSphere>,
}

impl AnimatedScene {
    /// Snapshot of every sphere at `time`, keeping order.
    pub fn scene_at(&self, time: f32) -> Scene {
        self.spheres
            .iter()
            .map(|animated| Sphere {
                transform: animated.motion.transform_at(animated.sphere.transform, time),
                ..animated.sphere
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// True if there are no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::Color;

    fn assert_near(actual: Vec3A, expected: Vec3A) {
        assert!(
            (actual - expected).abs().max_element() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn animated() -> AnimatedScene {
        let ground = Sphere::new(
            Motor::translation(Vec3A::new(0.0, -102.0, 0.0)),
            Color::splat(0.8),
            100.0,
        );
        let ball = Sphere::new(Motor::IDENTITY, Color::new(0.1, 0.8, 0.2), 1.0);
        AnimatedScene {
            spheres: vec![
                AnimatedSphere { sphere: ground, motion: Motion::Static },
                AnimatedSphere { sphere: ball, motion: Motion::Spiral },
            ],
        }
    }

    #[test]
    fn spiral_starts_above_z_axis() {
        assert_near(spiral_position(0.0), Vec3A::new(0.0, 2.0, 1.0));
    }

    #[test]
    fn static_spheres_do_not_move() {
        let scene = animated();
        for time in [0.0, 0.5, 3.0] {
            let frame = scene.scene_at(time);
            assert_near(frame.spheres[0].center(), Vec3A::new(0.0, -102.0, 0.0));
        }
    }

    #[test]
    fn spiral_spheres_follow_path_and_keep_tint() {
        let scene = animated();
        let frame = scene.scene_at(0.75);
        assert_near(frame.spheres[1].center(), spiral_position(0.75));
        assert_eq!(frame.spheres[1].color, Color::new(0.1, 0.8, 0.2));
        assert_eq!(frame.spheres[1].radius, 1.0);
    }

    #[test]
    fn snapshot_keeps_order() {
        let frame = animated().scene_at(1.0);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.spheres[0].radius, 100.0);
    }
}
