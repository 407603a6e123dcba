//! Parallel per-pixel dispatch.
//!
//! The image is cut into 16x16 tiles. Rayon hands out one band of tiles (16
//! rows) per task; inside a band, tiles are walked left to right and every
//! tile coordinate is bounds-checked, so partial tiles at the right and
//! bottom edges simply skip their overhang.

use glam::Vec3A;
use image::{ImageBuffer, Rgba};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, trace};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::Scene;
use crate::tracer::trace;

/// Edge length of a dispatch tile in pixels.
pub const TILE_SIZE: u32 = 16;

/// Linear RGBA frame, every channel in [0, 1] and alpha 1.
pub type Frame = ImageBuffer<Rgba<f32>, Vec<f32>>;

const CHANNELS: usize = 4;

/// Color of one pixel, or `None` when (x, y) lies outside the image.
///
/// Pure function of its arguments; this is the unit of parallel work.
pub fn shade_pixel(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    camera: &Camera,
    scene: &Scene,
) -> Option<Rgba<f32>> {
    if x >= width || y >= height {
        return None;
    }

    let ray = camera.get_ray(x, y, width, height);
    let color = trace(ray, camera, scene).clamp(Vec3A::ZERO, Vec3A::ONE);

    Some(Rgba([color.x, color.y, color.z, 1.0]))
}

/// Number of tiles across and down for a `width` x `height` image.
pub fn tile_grid(width: u32, height: u32) -> (u32, u32) {
    (width.div_ceil(TILE_SIZE), height.div_ceil(TILE_SIZE))
}

/// Render the whole frame on the rayon thread pool.
pub fn render(camera: &Camera, scene: &Scene, width: u32, height: u32) -> Frame {
    let mut image = Frame::new(width, height);
    if width == 0 || height == 0 {
        return image;
    }

    let (tiles_x, tiles_y) = tile_grid(width, height);
    info!(
        "Rendering {}x{} ({}x{} tiles, {} spheres) on {} threads...",
        width,
        height,
        tiles_x,
        tiles_y,
        scene.len(),
        rayon::current_num_threads()
    );
    let generation_start = std::time::Instant::now();

    let pb = ProgressBar::new(u64::from(tiles_x) * u64::from(tiles_y));
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} tiles ETA: {eta}") {
        pb.set_style(style);
    }

    let band_len = TILE_SIZE as usize * width as usize * CHANNELS;
    let buffer: &mut [f32] = &mut image;
    buffer
        .par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(tile_y, band)| {
            for tile_x in 0..tiles_x {
                render_tile(band, tile_x, tile_y as u32, width, height, camera, scene);
                pb.inc(1);
            }
        });

    pb.finish_and_clear();
    info!("Frame rendered in {:.2?}", generation_start.elapsed());

    image
}

/// Shade one tile into `band`, the slice holding its 16 rows.
fn render_tile(
    band: &mut [f32],
    tile_x: u32,
    tile_y: u32,
    width: u32,
    height: u32,
    camera: &Camera,
    scene: &Scene,
) {
    let band_top = tile_y * TILE_SIZE;
    for local_y in 0..TILE_SIZE {
        for local_x in 0..TILE_SIZE {
            let x = tile_x * TILE_SIZE + local_x;
            let y = band_top + local_y;
            let Some(pixel) = shade_pixel(x, y, width, height, camera, scene) else {
                continue;
            };
            let offset = ((y - band_top) as usize * width as usize + x as usize) * CHANNELS;
            band[offset..offset + CHANNELS].copy_from_slice(&pixel.0);
        }
    }
    trace!("tile ({tile_x}, {tile_y}) done");
}
