use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size_for(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    #[error("expected {expected} bytes for the raster but got {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Packed, row-major RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; buffer_size_for(width, height)],
        })
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let expected = buffer_size_for(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Writes the raster into an RGBA frame, forcing every alpha byte opaque.
    pub fn copy_into_rgba(&self, frame: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.width as usize * self.height as usize * 4;

        if frame.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: frame.len(),
            });
        }

        for (src, dst) in self.buffer.chunks_exact(3).zip(frame.chunks_exact_mut(4)) {
            dst[..3].copy_from_slice(src);
            dst[3] = 255;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10).unwrap();

        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_empty_raster() {
        assert_eq!(
            PixelBuffer::new(0, 4),
            Err(PixelBufferError::InvalidSize { width: 0, height: 4 })
        );
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap(), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = PixelBuffer::from_data(2, 2, vec![0; 11]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(Point { x: 2, y: 1 }, colour).unwrap();

        assert_eq!(&buffer.buffer()[15..18], &[1, 2, 3]);
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }).unwrap(), colour);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        let result = buffer.set_pixel(Point { x: 3, y: 0 }, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn test_copy_into_rgba_sets_opaque_alpha() {
        let buffer = PixelBuffer::from_data(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let mut frame = vec![0u8; 8];

        buffer.copy_into_rgba(&mut frame).unwrap();

        assert_eq!(frame, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_copy_into_rgba_rejects_wrong_frame_size() {
        let buffer = PixelBuffer::new(2, 2).unwrap();
        let mut frame = vec![0u8; 12];

        assert!(buffer.copy_into_rgba(&mut frame).is_err());
    }
}
