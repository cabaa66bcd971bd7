use std::path::PathBuf;

use clap::Parser;

use crate::controllers::explorer::config::{DEFAULT_PIXEL_HEIGHT, DEFAULT_PIXEL_WIDTH, ExplorerConfig};
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_BOUND_THRESHOLD, DEFAULT_MAX_ITERATIONS};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::zoom::mode::ZoomMode;
use crate::core::zoom::settings::{
    DEFAULT_ANIMATED_ZOOM_FACTOR, DEFAULT_ANIMATED_ZOOM_STEPS, DEFAULT_INSTANT_ZOOM_FACTOR,
    DEFAULT_MIN_PRECISION_FLOOR, ZoomSettings,
};

/// A scripted click: raster coordinates plus the zoom mode to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRequest {
    pub click: Point,
    pub mode: ZoomMode,
}

/// Parses `X,Y` or `X,Y:mode`. The mode defaults to instant.
pub fn parse_zoom_request(value: &str) -> Result<ZoomRequest, String> {
    let (coords, mode) = match value.split_once(':') {
        Some((coords, mode)) => (coords, mode.parse::<ZoomMode>().map_err(|e| e.to_string())?),
        None => (value, ZoomMode::Instant),
    };

    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y[:mode], got '{value}'"))?;
    let parse_coord = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid pixel coordinate '{s}': {e}"))
    };

    Ok(ZoomRequest {
        click: Point {
            x: parse_coord(x)?,
            y: parse_coord(y)?,
        },
        mode,
    })
}

/// Renders a Mandelbrot view and a scripted sequence of zooms to PPM frames.
///
/// Example:
///   mandelbrot_zoom --zoom 250,250 --zoom 300,120:animated --output-dir frames
#[derive(Parser, Debug, Clone)]
#[command(name = "mandelbrot_zoom", version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// Raster width in pixels
    #[arg(long, default_value_t = DEFAULT_PIXEL_WIDTH)]
    pub width: u32,

    /// Raster height in pixels
    #[arg(long, default_value_t = DEFAULT_PIXEL_HEIGHT)]
    pub height: u32,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Squared-magnitude escape threshold
    #[arg(long, default_value_t = DEFAULT_BOUND_THRESHOLD)]
    pub bound_threshold: f64,

    #[arg(long, default_value_t = -2.0)]
    pub min_x: f64,

    #[arg(long, default_value_t = 2.0)]
    pub max_x: f64,

    #[arg(long, default_value_t = -2.0)]
    pub min_y: f64,

    #[arg(long, default_value_t = 2.0)]
    pub max_y: f64,

    /// Extent multiplier for an instant zoom
    #[arg(long, default_value_t = DEFAULT_INSTANT_ZOOM_FACTOR)]
    pub instant_factor: f64,

    /// Extent multiplier per animation step
    #[arg(long, default_value_t = DEFAULT_ANIMATED_ZOOM_FACTOR)]
    pub animated_factor: f64,

    /// Frames per animated zoom
    #[arg(long, default_value_t = DEFAULT_ANIMATED_ZOOM_STEPS)]
    pub animated_steps: u32,

    /// Smallest plane extent an animation may reach
    #[arg(long, default_value_t = DEFAULT_MIN_PRECISION_FLOOR)]
    pub precision_floor: f64,

    /// Palette: glow or fire
    #[arg(long, default_value = "glow", value_parser = parse_palette)]
    pub palette: MandelbrotColourMapKinds,

    /// Directory receiving frame_NNNN.ppm files
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Click to replay, as X,Y or X,Y:instant / X,Y:animated. Repeatable.
    #[arg(long = "zoom", value_name = "X,Y[:MODE]", value_parser = parse_zoom_request)]
    pub zooms: Vec<ZoomRequest>,
}

fn parse_palette(value: &str) -> Result<MandelbrotColourMapKinds, String> {
    value
        .parse::<MandelbrotColourMapKinds>()
        .map_err(|e| e.to_string())
}

impl CliArgs {
    #[must_use]
    pub fn explorer_config(&self) -> ExplorerConfig {
        ExplorerConfig {
            pixel_width: self.width,
            pixel_height: self.height,
            max_iterations: self.max_iterations,
            bound_threshold: self.bound_threshold,
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
            zoom: ZoomSettings {
                instant_zoom_factor: self.instant_factor,
                animated_zoom_factor: self.animated_factor,
                animated_zoom_steps: self.animated_steps,
                min_precision_floor: self.precision_floor,
            },
            colour_map: self.palette,
        }
    }
}
