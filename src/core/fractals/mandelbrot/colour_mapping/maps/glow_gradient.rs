use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{escape_ratio, MandelbrotColourMap};

const HUE_START: f64 = 200.0;
const HUE_SPAN: f64 = 160.0;
const LIGHTNESS_START: f64 = 0.5;
const LIGHTNESS_SPAN: f64 = 0.3;

/// Blue glow: hue sweeps 200° to 360° and lightness rises from 50% to 80%
/// as escape slows. Points inside the set are flat light blue.
#[derive(Debug)]
pub struct MandelbrotGlowGradient {
    max_iterations: u32,
}

impl ColourMap<IterationResult> for MandelbrotGlowGradient {
    type Failure = MandelbrotColourMapError;

    fn map(&self, result: IterationResult) -> Result<Colour, Self::Failure> {
        let IterationResult::Escaped(iterations) = result else {
            return Ok(Colour::LIGHT_BLUE);
        };

        let t = escape_ratio(iterations, self.max_iterations)?;

        Ok(Colour::from_hsl(
            HUE_START + t * HUE_SPAN,
            1.0,
            LIGHTNESS_START + t * LIGHTNESS_SPAN,
        ))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGlowGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::GlowGradient
    }
}

impl MandelbrotGlowGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_is_light_blue() {
        let mapper = MandelbrotGlowGradient::new(200);

        assert_eq!(mapper.map(IterationResult::Bounded).unwrap(), Colour::LIGHT_BLUE);
    }

    #[test]
    fn test_immediate_escape_is_saturated_sky_blue() {
        let mapper = MandelbrotGlowGradient::new(200);

        assert_eq!(
            mapper.map(IterationResult::Escaped(0)).unwrap(),
            Colour { r: 0, g: 170, b: 255 }
        );
    }

    #[test]
    fn test_quarter_budget_is_pure_blue_hue() {
        // t = 0.25: hue 240°, lightness 57.5%
        let mapper = MandelbrotGlowGradient::new(200);

        assert_eq!(
            mapper.map(IterationResult::Escaped(50)).unwrap(),
            Colour { r: 38, g: 38, b: 255 }
        );
    }

    #[test]
    fn test_adjacent_escape_counts_have_close_colours() {
        let mapper = MandelbrotGlowGradient::new(200);

        for i in 0..200 {
            let current = mapper.map(IterationResult::Escaped(i)).unwrap();
            let next = mapper.map(IterationResult::Escaped(i + 1)).unwrap();

            assert!(
                current.max_channel_distance(&next) <= 6,
                "discontinuity between {} and {}: {:?} vs {:?}",
                i,
                i + 1,
                current,
                next
            );
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let mapper = MandelbrotGlowGradient::new(200);

        for i in [0, 7, 99, 150] {
            assert_eq!(
                mapper.map(IterationResult::Escaped(i)).unwrap(),
                mapper.map(IterationResult::Escaped(i)).unwrap()
            );
        }
    }

    #[test]
    fn test_rejects_iterations_past_budget() {
        let mapper = MandelbrotGlowGradient::new(100);

        assert_eq!(
            mapper.map(IterationResult::Escaped(101)),
            Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }
}
