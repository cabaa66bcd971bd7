use thiserror::Error;

use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_BOUND_THRESHOLD, DEFAULT_MAX_ITERATIONS};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::zoom::settings::ZoomSettings;

pub const DEFAULT_PIXEL_WIDTH: u32 = 500;
pub const DEFAULT_PIXEL_HEIGHT: u32 = 500;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid initial viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("max_iterations must be at least 1")]
    ZeroMaxIterations,
    #[error("bound_threshold must be positive and finite, got {0}")]
    InvalidBoundThreshold(f64),
    #[error("{name} must be positive and finite, got {value}")]
    InvalidZoomFactor { name: &'static str, value: f64 },
    #[error("animated_zoom_steps must be at least 1")]
    ZeroAnimatedSteps,
    #[error("min_precision_floor must be non-negative and finite, got {0}")]
    InvalidPrecisionFloor(f64),
}

/// Everything the explorer needs, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub max_iterations: u32,
    pub bound_threshold: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub zoom: ZoomSettings,
    pub colour_map: MandelbrotColourMapKinds,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            pixel_height: DEFAULT_PIXEL_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bound_threshold: DEFAULT_BOUND_THRESHOLD,
            min_x: -2.0,
            max_x: 2.0,
            min_y: -2.0,
            max_y: 2.0,
            zoom: ZoomSettings::default(),
            colour_map: MandelbrotColourMapKinds::default(),
        }
    }
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl ExplorerConfig {
    pub fn initial_viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(Viewport::new(
            self.min_x,
            self.max_x,
            self.min_y,
            self.max_y,
            self.pixel_width,
            self.pixel_height,
        )?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_viewport()?;

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if !positive_finite(self.bound_threshold) {
            return Err(ConfigError::InvalidBoundThreshold(self.bound_threshold));
        }

        for (name, value) in [
            ("instant_zoom_factor", self.zoom.instant_zoom_factor),
            ("animated_zoom_factor", self.zoom.animated_zoom_factor),
        ] {
            if !positive_finite(value) {
                return Err(ConfigError::InvalidZoomFactor { name, value });
            }
        }

        if self.zoom.animated_zoom_steps == 0 {
            return Err(ConfigError::ZeroAnimatedSteps);
        }

        let floor = self.zoom.min_precision_floor;
        if !floor.is_finite() || floor < 0.0 {
            return Err(ConfigError::InvalidPrecisionFloor(floor));
        }

        Ok(())
    }
}
