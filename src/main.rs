use clap::Parser;
use log::{error, info, warn};
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use mirrorpath::error::Result;
use mirrorpath::render::render;
use mirrorpath::scene_file::{default_scene, load_scene};
use output::{frame_path, save_image, send_image_to_tev};

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("mirrorpath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let (mut camera, animated) = match &args.scene {
        Some(path) => load_scene(Path::new(path))?,
        None => {
            info!("No scene given, using the built-in demo scene");
            default_scene()
        }
    };

    if let Some(max_bounces) = args.max_bounces {
        camera.max_bounces = max_bounces;
    }

    info!(
        "Image resolution: {}x{}, max bounces: {}, frames: {}",
        args.width, args.height, camera.max_bounces, args.frames
    );

    let frame_count = args.frames.max(1);
    let output_path = Path::new(&args.output);
    let tev_address = args
        .tev_address
        .as_deref()
        .or(args.tev.then_some("localhost:14158"));

    for index in 0..frame_count {
        let time = if args.frame_rate > 0.0 {
            index as f32 / args.frame_rate
        } else {
            0.0
        };
        let scene = animated.scene_at(time);
        if frame_count > 1 {
            info!("Frame {}/{} at t = {:.3}s", index + 1, frame_count, time);
        }

        let image = render(&camera, &scene, args.width, args.height);

        // A missing viewer should not lose the render
        if let Some(address) = tev_address {
            if let Err(e) = send_image_to_tev(&image, address) {
                warn!("Failed to send image to TEV on {}: {}", address, e);
            }
        }

        save_image(&image, &frame_path(output_path, index, frame_count))?;
    }

    Ok(())
}
