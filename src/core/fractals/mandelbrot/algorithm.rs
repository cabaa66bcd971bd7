use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const DEFAULT_BOUND_THRESHOLD: f64 = 4.0;

/// Escape-time test for `c`.
///
/// Starting from `z = 0`, checks `|z|² > bound_threshold` before each
/// `z ← z² + c` update and returns the index of the first failing check.
#[must_use]
pub fn iterate(c: Complex, max_iterations: u32, bound_threshold: f64) -> IterationResult {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > bound_threshold {
            return IterationResult::Escaped(iteration);
        }
        z = z.square() + c;
    }

    IterationResult::Bounded
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
    bound_threshold: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = IterationResult;
    type Failure = MandelbrotError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.viewport.contains_pixel(pixel) {
            return Err(MandelbrotError::PixelOutsideRaster {
                pixel,
                width: self.viewport.pixel_width(),
                height: self.viewport.pixel_height(),
            });
        }

        let c = self.viewport.pixel_to_plane(pixel.x, pixel.y);

        Ok(iterate(c, self.max_iterations, self.bound_threshold))
    }

    fn raster_size(&self) -> (u32, u32) {
        (self.viewport.pixel_width(), self.viewport.pixel_height())
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        viewport: Viewport,
        max_iterations: u32,
        bound_threshold: f64,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if !bound_threshold.is_finite() || bound_threshold <= 0.0 {
            return Err(MandelbrotError::InvalidBoundThreshold(bound_threshold));
        }

        Ok(Self {
            viewport,
            max_iterations,
            bound_threshold,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iterate_default(real: f64, imag: f64) -> IterationResult {
        iterate(
            Complex::new(real, imag),
            DEFAULT_MAX_ITERATIONS,
            DEFAULT_BOUND_THRESHOLD,
        )
    }

    #[test]
    fn test_origin_is_bounded() {
        assert_eq!(iterate_default(0.0, 0.0), IterationResult::Bounded);
        assert_eq!(iterate(Complex::ZERO, 1, 4.0), IterationResult::Bounded);
        assert_eq!(iterate(Complex::ZERO, 10_000, 4.0), IterationResult::Bounded);
    }

    #[test]
    fn test_period_two_point_is_bounded() {
        // 0 -> -1 -> 0 -> -1 ...
        assert_eq!(iterate_default(-1.0, 0.0), IterationResult::Bounded);
    }

    #[test]
    fn test_one_plus_i_escapes_after_two_updates() {
        // z1 = (1, 1) with |z|² = 2, z2 = (1, 3) with |z|² = 10
        assert_eq!(iterate_default(1.0, 1.0), IterationResult::Escaped(2));
    }

    #[test]
    fn test_points_outside_radius_two_escape_at_first_update() {
        for c in [
            Complex::new(2.5, 0.0),
            Complex::new(-3.0, 0.0),
            Complex::new(0.0, 2.01),
            Complex::new(-1.5, -1.5),
            Complex::new(100.0, -100.0),
        ] {
            assert_eq!(
                iterate(c, DEFAULT_MAX_ITERATIONS, DEFAULT_BOUND_THRESHOLD),
                IterationResult::Escaped(1),
                "expected {:?} to escape at iteration 1",
                c
            );
        }
    }

    #[test]
    fn test_escape_count_never_reaches_budget() {
        let max_iterations = 50;
        let mut escaped = 0;

        for step in 0..40 {
            let c = Complex::new(-2.0 + f64::from(step) * 0.1, 0.6);

            if let IterationResult::Escaped(count) = iterate(c, max_iterations, 4.0) {
                assert!(count < max_iterations);
                escaped += 1;
            }
        }

        assert!(escaped > 0);
    }

    #[test]
    fn test_larger_threshold_delays_escape() {
        let c = Complex::new(1.0, 0.5);

        let tight = iterate(c, 1000, 4.0).escape_count().unwrap();
        let loose = iterate(c, 1000, 1.0e6).escape_count().unwrap();

        assert!(loose >= tight);
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 10, 10).unwrap();

        assert_eq!(
            MandelbrotAlgorithm::new(viewport, 0, 4.0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_new_rejects_invalid_threshold() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 10, 10).unwrap();

        assert!(MandelbrotAlgorithm::new(viewport, 10, 0.0).is_err());
        assert!(MandelbrotAlgorithm::new(viewport, 10, f64::NAN).is_err());
    }

    #[test]
    fn test_compute_maps_pixels_through_viewport() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(viewport, 200, 4.0).unwrap();

        // pixel (2, 2) is the plane origin
        assert_eq!(
            algorithm.compute(Point { x: 2, y: 2 }),
            Ok(IterationResult::Bounded)
        );
        // pixel (0, 0) is (-2, -2), |c|² = 8
        assert_eq!(
            algorithm.compute(Point { x: 0, y: 0 }),
            Ok(IterationResult::Escaped(1))
        );
    }

    #[test]
    fn test_compute_rejects_pixel_outside_raster() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(viewport, 200, 4.0).unwrap();

        assert_eq!(
            algorithm.compute(Point { x: 4, y: 0 }),
            Err(MandelbrotError::PixelOutsideRaster {
                pixel: Point { x: 4, y: 0 },
                width: 4,
                height: 4
            })
        );
    }
}
