use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel on the calling thread, returning row-major results.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let (width, height) = algorithm.raster_size();
    let mut results = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            results.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct CoordinateAlgorithm {}

    impl FractalAlgorithm for CoordinateAlgorithm {
        type Success = (u32, u32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }

        fn raster_size(&self) -> (u32, u32) {
            (3, 2)
        }
    }

    struct FailingAlgorithm {}

    impl FractalAlgorithm for FailingAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }

        fn raster_size(&self) -> (u32, u32) {
            (2, 2)
        }
    }

    #[test]
    fn test_serial_visits_pixels_in_row_major_order() {
        let results = generate_fractal_serial(&CoordinateAlgorithm {}).unwrap();

        assert_eq!(results, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_serial_propagates_failure() {
        assert!(generate_fractal_serial(&FailingAlgorithm {}).is_err());
    }
}
