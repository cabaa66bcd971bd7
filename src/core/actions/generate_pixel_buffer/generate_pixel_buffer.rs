use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<E: std::error::Error + 'static> {
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Maps row-major per-pixel values to colours and packs them into a
/// `width` x `height` buffer.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    let mut data: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for value in input {
        let colour = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;
        data.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(PixelBuffer::from_data(width, height, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::fmt;

    #[derive(Debug)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl std::error::Error for StubError {}

    struct GreyscaleMap {}

    impl ColourMap<u8> for GreyscaleMap {
        type Failure = StubError;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Greyscale"
        }
    }

    struct FailingMap {}

    impl ColourMap<u8> for FailingMap {
        type Failure = StubError;

        fn map(&self, _: u8) -> Result<Colour, Self::Failure> {
            Err(StubError {})
        }

        fn display_name(&self) -> &str {
            "Failing"
        }
    }

    #[test]
    fn test_values_are_packed_row_major() {
        let buffer = generate_pixel_buffer(vec![1, 2, 3, 4, 5, 6], &GreyscaleMap {}, 3, 2).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap().r, 4);
        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }).unwrap().g, 3);
        assert_eq!(buffer.buffer_size(), 18);
    }

    #[test]
    fn test_colour_map_failure_is_propagated() {
        let result = generate_pixel_buffer(vec![1, 2, 3, 4], &FailingMap {}, 2, 2);

        assert!(matches!(result, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_input_length_must_match_raster() {
        let result = generate_pixel_buffer(vec![1, 2, 3], &GreyscaleMap {}, 2, 2);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(PixelBufferError::BoundsMismatch {
                expected: 12,
                actual: 9
            }))
        ));
    }
}
