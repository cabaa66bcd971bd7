use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("bound threshold must be positive and finite, got {0}")]
    InvalidBoundThreshold(f64),
    #[error("pixel (x: {}, y: {}) is outside the {width}x{height} raster", .pixel.x, .pixel.y)]
    PixelOutsideRaster {
        pixel: Point,
        width: u32,
        height: u32,
    },
}
