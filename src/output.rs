//! # Output Module
//!
//! Presents rendered [`Frame`]s:
//! - PNG export, 8-bit with sRGB encoding
//! - EXR export, linear f32 RGBA
//! - Live display in TEV (The EXR Viewer) over TCP
//!
//! Frames arrive already clamped to [0, 1], so no tone mapping is needed here.

use exr::prelude::write_rgba_file;
use image::{ImageBuffer, Rgba};
use log::{debug, info};
use std::net::TcpStream;
use std::path::Path;
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

use mirrorpath::error::{MirrorError, Result};
use mirrorpath::render::Frame;

const TEV_IMAGE_NAME: &str = "mirrorpath_output";
const TEV_DEFAULT_PORT: u16 = 14158;

/// Stream a frame to a running TEV instance.
///
/// `tev_address` may omit the port, in which case 14158 is used. The frame is
/// sent interleaved as-is, using per-channel offsets and a stride of four.
pub fn send_image_to_tev(image: &Frame, tev_address: &str) -> Result<()> {
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:{}", tev_address, TEV_DEFAULT_PORT)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);
    let stream = TcpStream::connect(&tev_address)?;
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let (width, height) = image.dimensions();
    client.send(PacketCreateImage {
        image_name: TEV_IMAGE_NAME,
        width,
        height,
        channel_names: &["R", "G", "B", "A"],
        grab_focus: true,
    })?;

    let data: &[f32] = image.as_raw();
    debug!(
        "Sending {} pixels to TEV ({:.1} MB)",
        data.len() / 4,
        data.len() as f32 * 4.0 / 1_000_000.0
    );
    let start_time = std::time::Instant::now();

    client.send(PacketUpdateImage {
        image_name: TEV_IMAGE_NAME,
        grab_focus: false,
        channel_names: &["R", "G", "B", "A"],
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, 1, 2, 3],
        channel_strides: &[4, 4, 4, 4],
        data,
    })?;

    info!(
        "Image data sent to TEV at {} in {:.2?}",
        tev_address,
        start_time.elapsed()
    );
    Ok(())
}

/// sRGB transfer function with the linear toe for dark values.
fn linear_to_srgb(linear: f32) -> f32 {
    if linear <= 0.0 {
        0.0
    } else if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Quantize a linear [0, 1] frame to 8-bit sRGB.
pub fn to_srgb8(image: &Frame) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        let encode = |channel: f32| (linear_to_srgb(channel.clamp(0.0, 1.0)) * 255.0).round() as u8;
        Rgba([
            encode(pixel[0]),
            encode(pixel[1]),
            encode(pixel[2]),
            (pixel[3].clamp(0.0, 1.0) * 255.0).round() as u8,
        ])
    })
}

/// Save a frame as an 8-bit sRGB PNG.
pub fn save_image_as_png(image: &Frame, output_path: &Path) -> Result<()> {
    to_srgb8(image).save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a frame as a linear f32 RGBA EXR.
pub fn save_image_as_exr(image: &Frame, output_path: &Path) -> Result<()> {
    let (width, height) = image.dimensions();
    write_rgba_file(output_path, width as usize, height as usize, |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2], pixel[3])
    })?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save a frame, picking the encoder from the file extension.
pub fn save_image(image: &Frame, output_path: &Path) -> Result<()> {
    let extension = output_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_image_as_png(image, output_path),
        "exr" => save_image_as_exr(image, output_path),
        other => Err(MirrorError::UnsupportedFormat(format!(
            "'{}' (only .png and .exr are supported)",
            other
        ))),
    }
}

/// Path for frame `index` of an animation: `render.png` becomes `render_0007.png`.
///
/// Single-frame renders keep the path unchanged.
pub fn frame_path(output_path: &Path, index: u32, frame_count: u32) -> std::path::PathBuf {
    if frame_count <= 1 {
        return output_path.to_path_buf();
    }

    let stem = output_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let file_name = match output_path.extension() {
        Some(ext) => format!("{}_{:04}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{:04}", stem, index),
    };
    output_path.with_file_name(file_name)
}
