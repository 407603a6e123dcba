use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "mirrorpath")]
#[command(about = "A mirror-sphere path tracer driven by PGA motors")]
pub struct Args {
    /// Scene description (JSON). Uses the built-in demo scene when omitted.
    #[arg(short, long, help = "Scene description (JSON); built-in demo scene when omitted")]
    pub scene: Option<String>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "800", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600", help = "Image height in pixels")]
    pub height: u32,

    /// Override the camera's bounce budget
    #[arg(long, short = 'b', help = "Override the camera's bounce budget")]
    pub max_bounces: Option<u32>,

    /// Number of frames to render along the animation
    #[arg(long, default_value = "1", help = "Number of frames to render along the animation")]
    pub frames: u32,

    /// Frames per second used to turn frame indices into animation time
    #[arg(long, default_value = "30.0", help = "Frames per second used to turn frame indices into animation time")]
    pub frame_rate: f32,

    /// Send image to TEV for real-time visualization
    #[arg(long, help = "Send image to TEV for real-time visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Output file path (.png for 8-bit sRGB, .exr for linear f32)
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png for 8-bit sRGB, .exr for linear f32)")]
    pub output: String,
}
