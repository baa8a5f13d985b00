use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use raytrace::ppm::Format;
use raytrace::scene::SceneKind;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    Showcase,
    Random,
    Cubes,
}

impl From<SceneArg> for SceneKind {
    fn from(scene: SceneArg) -> Self {
        match scene {
            SceneArg::Showcase => SceneKind::Showcase,
            SceneArg::Random => SceneKind::Random,
            SceneArg::Cubes => SceneKind::Cubes,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// ASCII P3
    P3,
    /// Binary P6
    P6,
}

impl From<FormatArg> for Format {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::P3 => Format::Plain,
            FormatArg::P6 => Format::Raw,
        }
    }
}

/// Parses `W:H` or a plain decimal ratio.
fn parse_aspect_ratio(value: &str) -> Result<f32, String> {
    let ratio = match value.split_once(':') {
        Some((w, h)) => {
            let w: f32 = w.trim().parse().map_err(|e| format!("bad width `{}`: {}", w, e))?;
            let h: f32 = h.trim().parse().map_err(|e| format!("bad height `{}`: {}", h, e))?;
            w / h
        }
        None => value.trim().parse().map_err(|e| format!("bad ratio `{}`: {}", value, e))?,
    };
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("aspect ratio must be positive, got `{}`", value))
    }
}

#[derive(Debug, Parser)]
#[command(name = "raytrace")]
#[command(about = "Renders a scene of spheres and cubes to a PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Width to height ratio, as `W:H` or a decimal
    #[arg(long, default_value = "3:2", value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Seed for scene generation and sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = SceneArg::Showcase)]
    pub scene: SceneArg,

    #[arg(long, value_enum, default_value_t = FormatArg::P3)]
    pub format: FormatArg,

    /// Output file; the image goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Logging level, overridden by RUST_LOG
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
