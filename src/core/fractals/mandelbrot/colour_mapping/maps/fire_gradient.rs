use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{escape_ratio, MandelbrotColourMap};

#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap<IterationResult> for MandelbrotFireGradient {
    type Failure = MandelbrotColourMapError;

    fn map(&self, result: IterationResult) -> Result<Colour, Self::Failure> {
        let IterationResult::Escaped(iterations) = result else {
            return Ok(Colour::BLACK);
        };

        let t = escape_ratio(iterations, self.max_iterations)?;

        // black -> red -> orange -> yellow -> white, each band a quarter wide
        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_is_black() {
        let mapper = MandelbrotFireGradient::new(100);

        assert_eq!(mapper.map(IterationResult::Bounded).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_immediate_escape_is_black() {
        let mapper = MandelbrotFireGradient::new(100);

        assert_eq!(mapper.map(IterationResult::Escaped(0)).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_band_boundaries() {
        let mapper = MandelbrotFireGradient::new(100);

        assert_eq!(
            mapper.map(IterationResult::Escaped(25)).unwrap(),
            Colour { r: 255, g: 0, b: 0 }
        );
        assert_eq!(
            mapper.map(IterationResult::Escaped(50)).unwrap(),
            Colour { r: 255, g: 165, b: 0 }
        );
        assert_eq!(
            mapper.map(IterationResult::Escaped(75)).unwrap(),
            Colour { r: 255, g: 255, b: 0 }
        );
    }

    #[test]
    fn test_near_budget_is_near_white() {
        let mapper = MandelbrotFireGradient::new(100);
        let colour = mapper.map(IterationResult::Escaped(99)).unwrap();

        assert_eq!(colour.r, 255);
        assert_eq!(colour.g, 255);
        assert!(colour.b > 240);
    }

    #[test]
    fn test_rejects_iterations_past_budget() {
        let mapper = MandelbrotFireGradient::new(100);

        assert!(mapper.map(IterationResult::Escaped(101)).is_err());
    }
}
