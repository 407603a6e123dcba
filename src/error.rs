//! Error types for the host side of mirrorpath.
//!
//! The tracing core never fails; these cover scene loading and image output.

use thiserror::Error;

/// Failures while loading scenes or writing frames
#[derive(Error, Debug)]
pub enum MirrorError {
    /// File or socket failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed scene JSON
    #[error("Scene parse error: {0}")]
    SceneParse(#[from] serde_json::Error),

    /// Scene parsed but breaks the camera or sphere contract
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// PNG encoding or writing failed
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding or writing failed
    #[error("EXR error: {0}")]
    Exr(#[from] exr::error::Error),

    /// Output path has an extension other than .png or .exr
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result alias for host-side operations
pub type Result<T> = std::result::Result<T, MirrorError>;
