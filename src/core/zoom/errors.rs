use thiserror::Error;

use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoomError {
    #[error("click (x: {}, y: {}) is outside the {width}x{height} raster", .click.x, .click.y)]
    ClickOutsideRaster {
        click: Point,
        width: u32,
        height: u32,
    },
    #[error("zoomed viewport is degenerate: {0}")]
    Viewport(#[from] ViewportError),
}
