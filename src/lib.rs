//! mirrorpath, a mirror-only sphere path tracer
//!
//! Cameras and spheres are placed with projective geometric algebra motors.
//! Every pixel is an independent pure function of the camera and the sphere
//! list, traced by bounded specular bouncing into a gradient sky, and the
//! frame is dispatched across the rayon pool in 16x16 tiles.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod motor;
pub mod ray;
pub mod interval;
pub mod sphere;
pub mod hittable;
pub mod camera;
pub mod tracer;
pub mod render;
pub mod animation;
pub mod scene_file;
pub mod error;
