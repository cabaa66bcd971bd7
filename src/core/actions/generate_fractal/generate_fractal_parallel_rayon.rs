use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is computed as one task and rows are collected back in order, so
/// the output is row-major and identical to [`generate_fractal_serial`]. The
/// first failing pixel aborts the whole frame.
///
/// [`generate_fractal_serial`]: super::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let (width, height) = algorithm.raster_size();

    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        width: u32,
        height: u32,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.x) * 1000 + u64::from(pixel.y))
        }

        fn raster_size(&self) -> (u32, u32) {
            (self.width, self.height)
        }
    }

    #[derive(Debug)]
    struct StubFailOnRowAlgorithm {
        failing_row: u32,
    }

    impl FractalAlgorithm for StubFailOnRowAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.y == self.failing_row {
                return Err(StubError {});
            }
            Ok(0)
        }

        fn raster_size(&self) -> (u32, u32) {
            (4, 6)
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm { width: 11, height: 9 };

        let serial_results = generate_fractal_serial(&algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubSuccessAlgorithm { width: 1, height: 1 };

        assert_eq!(generate_fractal_parallel_rayon(&algorithm).unwrap(), vec![0]);
    }

    #[test]
    fn test_rayon_with_large_raster() {
        let algorithm = StubSuccessAlgorithm { width: 101, height: 101 };

        let serial_results = generate_fractal_serial(&algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results.len(), 101 * 101);
        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailOnRowAlgorithm { failing_row: 5 };

        assert_eq!(generate_fractal_parallel_rayon(&algorithm), Err(StubError {}));
    }
}
