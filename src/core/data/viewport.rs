use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport bounds must be finite and ordered: x [{min_x}, {max_x}], y [{min_y}, {max_y}]")]
    InvalidBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
    #[error("viewport pixel size must be positive: {width}x{height}")]
    InvalidPixelSize { width: u32, height: u32 },
    #[error("cannot interpolate between {from_width}x{from_height} and {to_width}x{to_height} viewports")]
    PixelDimensionsMismatch {
        from_width: u32,
        from_height: u32,
        to_width: u32,
        to_height: u32,
    },
    #[error("interpolation progress {0} is outside [0, 1]")]
    ProgressOutOfRange(f64),
}

/// A rectangle of the complex plane mapped onto a raster of
/// `pixel_width` x `pixel_height` pixels.
///
/// The real axis runs left to right and the imaginary axis top to bottom,
/// so pixel `(0, 0)` maps to `(min_x, min_y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    pixel_width: u32,
    pixel_height: u32,
}

impl Viewport {
    pub fn new(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, ViewportError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ViewportError::InvalidPixelSize {
                width: pixel_width,
                height: pixel_height,
            });
        }

        let finite = [min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite());

        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(ViewportError::InvalidBounds {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            pixel_width,
            pixel_height,
        })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Plane-space extent along the real axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Plane-space extent along the imaginary axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.min_x + self.width() / 2.0,
            imag: self.min_y + self.height() / 2.0,
        }
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x < self.pixel_width && pixel.y < self.pixel_height
    }

    /// Maps a pixel to the plane. Coordinates are not clamped; callers keep
    /// `px < pixel_width` and `py < pixel_height`.
    #[must_use]
    pub fn pixel_to_plane(&self, px: u32, py: u32) -> Complex {
        Complex {
            real: self.min_x + (f64::from(px) / f64::from(self.pixel_width)) * self.width(),
            imag: self.min_y + (f64::from(py) / f64::from(self.pixel_height)) * self.height(),
        }
    }

    /// Inverse of [`Viewport::pixel_to_plane`], returning fractional pixel
    /// coordinates. Points outside the viewport map outside the raster.
    #[must_use]
    pub fn plane_to_pixel(&self, point: Complex) -> (f64, f64) {
        (
            (point.real - self.min_x) / self.width() * f64::from(self.pixel_width),
            (point.imag - self.min_y) / self.height() * f64::from(self.pixel_height),
        )
    }

    /// A viewport with the given plane extents centred on `center`, keeping
    /// this viewport's pixel dimensions.
    pub fn recentered(
        &self,
        center: Complex,
        new_width: f64,
        new_height: f64,
    ) -> Result<Self, ViewportError> {
        Self::new(
            center.real - new_width / 2.0,
            center.real + new_width / 2.0,
            center.imag - new_height / 2.0,
            center.imag + new_height / 2.0,
            self.pixel_width,
            self.pixel_height,
        )
    }

    /// Component-wise linear interpolation of the plane bounds of `from` and
    /// `to`, with `t = 0` yielding `from` and `t = 1` yielding `to`.
    pub fn interpolated(from: &Self, to: &Self, t: f64) -> Result<Self, ViewportError> {
        if from.pixel_width != to.pixel_width || from.pixel_height != to.pixel_height {
            return Err(ViewportError::PixelDimensionsMismatch {
                from_width: from.pixel_width,
                from_height: from.pixel_height,
                to_width: to.pixel_width,
                to_height: to.pixel_height,
            });
        }

        if !(0.0..=1.0).contains(&t) {
            return Err(ViewportError::ProgressOutOfRange(t));
        }

        let lerp = |a: f64, b: f64| a + (b - a) * t;

        Self::new(
            lerp(from.min_x, to.min_x),
            lerp(from.max_x, to.max_x),
            lerp(from.min_y, to.min_y),
            lerp(from.max_y, to.max_y),
            from.pixel_width,
            from.pixel_height,
        )
    }
}
