use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap:
    ColourMap<IterationResult, Failure = MandelbrotColourMapError> + Send + Sync
{
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<IterationResult> for Box<dyn MandelbrotColourMap> {
    type Failure = MandelbrotColourMapError;

    fn map(&self, value: IterationResult) -> Result<Colour, Self::Failure> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Normalised escape speed in `[0, 1]`, rejecting counts past the budget.
pub(crate) fn escape_ratio(
    iterations: u32,
    max_iterations: u32,
) -> Result<f64, MandelbrotColourMapError> {
    if iterations > max_iterations {
        return Err(MandelbrotColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(f64::from(iterations) / f64::from(max_iterations))
}
