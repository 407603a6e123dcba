//! JSON scene descriptions and the built-in demo scene.
//!
//! ```json
//! {
//!   "camera": { "position": [-3, 0, 0], "vfovDegrees": 90, "maxBounces": 8 },
//!   "spheres": [
//!     { "position": [0, -102, 0], "radius": 100, "color": [0.8, 0.8, 0.8] },
//!     { "radius": 1, "color": [0.1, 0.8, 0.2], "spiral": true }
//!   ]
//! }
//! ```
//!
//! Placement is either `position` plus an optional `rotation` (plane angles in
//! radians, applied xy, then xz, then yz, then the translation), or a raw
//! `motor` array `[s, e12, e13, e23, e01, e02, e03, e0123]`, which wins if present.
//!
//! This is the only place inputs are validated. The core trusts whatever it
//! is handed.

use glam::Vec3A;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

use crate::animation::{AnimatedScene, AnimatedSphere, Motion};
use crate::camera::Camera;
use crate::error::{MirrorError, Result};
use crate::hittable::Color;
use crate::motor::Motor;
use crate::sphere::Sphere;

/// Plane rotation angles in radians.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RotationDescription {
    /// Angle in the xy plane
    pub xy: f32,
    /// Angle in the xz plane
    pub xz: f32,
    /// Angle in the yz plane
    pub yz: f32,
}

/// Where an object sits in the world.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDescription {
    /// Translation applied after rotation
    #[serde(default)]
    pub position: [f32; 3],
    /// Optional orientation
    #[serde(default)]
    pub rotation: Option<RotationDescription>,
    /// Raw motor components, overriding position and rotation
    #[serde(default)]
    pub motor: Option<[f32; 8]>,
}

impl PlacementDescription {
    /// Motor described by this placement.
    ///
    /// Raw motors are rescaled to unit rotor norm.
    pub fn motor(&self) -> Motor {
        if let Some(raw) = self.motor {
            return Motor::from_array(raw).normalized();
        }

        let rotation = self.rotation.unwrap_or_default();
        Motor::rotation_xy(rotation.xy)
            .then(Motor::rotation_xz(rotation.xz))
            .then(Motor::rotation_yz(rotation.yz))
            .then(Motor::translation(Vec3A::from_array(self.position)))
    }

    fn validate(&self, what: &str) -> Result<()> {
        if let Some(raw) = self.motor {
            if !raw.iter().all(|c| c.is_finite()) {
                return Err(MirrorError::InvalidScene(format!(
                    "{what}: motor components must be finite"
                )));
            }
            let rotor = Motor::from_array(raw).rotor_norm();
            if !rotor.is_finite() || rotor <= f32::EPSILON {
                return Err(MirrorError::InvalidScene(format!(
                    "{what}: motor has a zero-length rotor"
                )));
            }
        }
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(MirrorError::InvalidScene(format!(
                "{what}: position must be finite"
            )));
        }
        Ok(())
    }
}

/// Camera block of a scene file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraDescription {
    /// Eye placement
    #[serde(flatten)]
    pub placement: PlacementDescription,
    /// Vertical field of view in degrees
    #[serde(default = "default_vfov_degrees")]
    pub vfov_degrees: f32,
    /// Nearest accepted hit distance
    #[serde(default = "default_min_distance")]
    pub min_distance: f32,
    /// Farthest accepted hit distance
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
    /// Bounce budget
    #[serde(default = "default_max_bounces")]
    pub max_bounces: u32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            placement: PlacementDescription::default(),
            vfov_degrees: default_vfov_degrees(),
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
            max_bounces: default_max_bounces(),
        }
    }
}

/// One sphere of a scene file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SphereDescription {
    /// Center placement
    #[serde(flatten)]
    pub placement: PlacementDescription,
    /// Radius
    pub radius: f32,
    /// Reflectance tint
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    /// Follow the spiral path instead of the authored placement
    #[serde(default)]
    pub spiral: bool,
}

/// Whole scene file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    /// Camera settings
    #[serde(default)]
    pub camera: CameraDescription,
    /// Spheres in scan order
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

const fn default_vfov_degrees() -> f32 {
    90.0
}

const fn default_min_distance() -> f32 {
    0.001
}

const fn default_max_distance() -> f32 {
    100.0
}

const fn default_max_bounces() -> u32 {
    8
}

const fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl SceneDescription {
    /// Parse a scene from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Check the contract the tracing core relies on.
    pub fn validate(&self) -> Result<()> {
        let camera = &self.camera;
        camera.placement.validate("camera")?;
        if !(camera.vfov_degrees > 0.0 && camera.vfov_degrees < 180.0) {
            return Err(MirrorError::InvalidScene(format!(
                "camera: vfovDegrees must be in (0, 180), got {}",
                camera.vfov_degrees
            )));
        }
        if !(camera.min_distance > 0.0 && camera.min_distance < camera.max_distance) {
            return Err(MirrorError::InvalidScene(format!(
                "camera: need 0 < minDistance < maxDistance, got {} and {}",
                camera.min_distance, camera.max_distance
            )));
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            let what = format!("sphere {index}");
            sphere.placement.validate(&what)?;
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(MirrorError::InvalidScene(format!(
                    "{what}: radius must be positive, got {}",
                    sphere.radius
                )));
            }
            if !sphere.color.iter().all(|c| (0.0..=1.0).contains(c)) {
                return Err(MirrorError::InvalidScene(format!(
                    "{what}: color components must be in [0, 1], got {:?}",
                    sphere.color
                )));
            }
        }
        Ok(())
    }

    /// Validate and convert into the camera and animated sphere list.
    pub fn build(&self) -> Result<(Camera, AnimatedScene)> {
        self.validate()?;

        let camera = Camera {
            transform: self.camera.placement.motor(),
            vfov: self.camera.vfov_degrees.to_radians(),
            min_distance: self.camera.min_distance,
            max_distance: self.camera.max_distance,
            max_bounces: self.camera.max_bounces,
        };

        let spheres = self
            .spheres
            .iter()
            .map(|description| AnimatedSphere {
                sphere: Sphere::new(
                    description.placement.motor(),
                    Color::from_array(description.color),
                    description.radius,
                ),
                motion: if description.spiral {
                    Motion::Spiral
                } else {
                    Motion::Static
                },
            })
            .collect();

        Ok((camera, AnimatedScene { spheres }))
    }
}

/// Read, validate, and build a scene file.
pub fn load_scene(path: &Path) -> Result<(Camera, AnimatedScene)> {
    let raw = std::fs::read_to_string(path)?;
    let (camera, scene) = SceneDescription::from_json(&raw)?.build()?;

    info!("Loaded {} spheres from {}", scene.len(), path.display());
    for (index, animated) in scene.spheres.iter().enumerate() {
        debug!(
            "sphere {}: center {:?}, radius {}, color {:?}, motion {:?}",
            index,
            animated.sphere.center(),
            animated.sphere.radius,
            animated.sphere.color,
            animated.motion
        );
    }

    Ok((camera, scene))
}

/// Gray ground sphere, a green ball on the spiral path, camera at x = -3.
pub fn default_scene() -> (Camera, AnimatedScene) {
    let camera = Camera {
        transform: Motor::translation(Vec3A::new(-3.0, 0.0, 0.0)),
        vfov: 90f32.to_radians(),
        min_distance: 0.001,
        max_distance: 100.0,
        max_bounces: 8,
    };

    let ground = Sphere::new(
        Motor::translation(Vec3A::new(0.0, -102.0, 0.0)),
        Color::new(0.8, 0.8, 0.8),
        100.0,
    );
    let ball = Sphere::new(Motor::IDENTITY, Color::new(0.1, 0.8, 0.2), 1.0);

    let scene = AnimatedScene {
        spheres: vec![
            AnimatedSphere {
                sphere: ground,
                motion: Motion::Static,
            },
            AnimatedSphere {
                sphere: ball,
                motion: Motion::Spiral,
            },
        ],
    };

    (camera, scene)
}
