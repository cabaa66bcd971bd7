use std::time::Instant;

use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("algorithm error: {0}")]
    Algorithm(#[from] MandelbrotError),
    #[error("colour map error: {0}")]
    ColourMap(#[from] MandelbrotColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

impl From<GeneratePixelBufferError<MandelbrotColourMapError>> for RenderError {
    fn from(err: GeneratePixelBufferError<MandelbrotColourMapError>) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

/// Turns a viewport into a complete colour frame.
pub struct FrameRenderer {
    max_iterations: u32,
    bound_threshold: f64,
    colour_map: Box<dyn MandelbrotColourMap>,
}

impl FrameRenderer {
    pub fn new(
        max_iterations: u32,
        bound_threshold: f64,
        colour_map_kind: MandelbrotColourMapKinds,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if !bound_threshold.is_finite() || bound_threshold <= 0.0 {
            return Err(MandelbrotError::InvalidBoundThreshold(bound_threshold));
        }

        Ok(Self {
            max_iterations,
            bound_threshold,
            colour_map: mandelbrot_colour_map_factory(colour_map_kind, max_iterations),
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bound_threshold(&self) -> f64 {
        self.bound_threshold
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.colour_map.kind()
    }

    pub fn set_colour_map_kind(&mut self, kind: MandelbrotColourMapKinds) {
        if kind != self.colour_map.kind() {
            self.colour_map = mandelbrot_colour_map_factory(kind, self.max_iterations);
        }
    }

    /// Renders every pixel of `viewport`. Rows are evaluated in parallel; the
    /// buffer is only returned once the whole frame is coloured.
    pub fn render(&self, viewport: &Viewport) -> Result<PixelBuffer, RenderError> {
        let start = Instant::now();
        let algorithm = MandelbrotAlgorithm::new(*viewport, self.max_iterations, self.bound_threshold)?;
        let fractal = generate_fractal_parallel_rayon(&algorithm)?;
        let pixel_buffer = generate_pixel_buffer(
            fractal,
            &self.colour_map,
            viewport.pixel_width(),
            viewport.pixel_height(),
        )?;

        tracing::debug!(
            width = viewport.pixel_width(),
            height = viewport.pixel_height(),
            min_x = viewport.min_x(),
            max_x = viewport.max_x(),
            min_y = viewport.min_y(),
            max_y = viewport.max_y(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "rendered frame"
        );

        Ok(pixel_buffer)
    }
}

/// Renders `viewport` with the default glow palette.
pub fn render_frame(
    viewport: &Viewport,
    max_iterations: u32,
    bound_threshold: f64,
) -> Result<PixelBuffer, RenderError> {
    FrameRenderer::new(
        max_iterations,
        bound_threshold,
        MandelbrotColourMapKinds::GlowGradient,
    )?
    .render(viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn default_viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(-2.0, 2.0, -2.0, 2.0, width, height).unwrap()
    }

    #[test]
    fn test_frame_covers_whole_raster() {
        let buffer = render_frame(&default_viewport(40, 30), 200, 4.0).unwrap();

        assert_eq!(buffer.width(), 40);
        assert_eq!(buffer.height(), 30);
        assert_eq!(buffer.buffer_size(), 40 * 30 * 3);
    }

    #[test]
    fn test_plane_origin_pixel_is_inside_colour() {
        let buffer = render_frame(&default_viewport(500, 500), 200, 4.0).unwrap();

        assert_eq!(buffer.pixel(Point { x: 250, y: 250 }).unwrap(), Colour::LIGHT_BLUE);
    }

    #[test]
    fn test_corner_pixel_escapes_immediately() {
        // pixel (0, 0) is (-2, -2) which escapes at iteration 1 of 200
        let buffer = render_frame(&default_viewport(20, 20), 200, 4.0).unwrap();
        let t = 1.0 / 200.0;
        let expected = Colour::from_hsl(200.0 + t * 160.0, 1.0, 0.5 + t * 0.3);

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), expected);
    }

    #[test]
    fn test_parallel_render_matches_serial_colouring() {
        let viewport = Viewport::new(-1.5, 0.5, -1.0, 1.0, 37, 23).unwrap();
        let renderer = FrameRenderer::new(64, 4.0, MandelbrotColourMapKinds::FireGradient).unwrap();

        let algorithm = MandelbrotAlgorithm::new(viewport, 64, 4.0).unwrap();
        let serial = generate_fractal_serial(&algorithm).unwrap();
        let expected = generate_pixel_buffer(
            serial,
            &mandelbrot_colour_map_factory(MandelbrotColourMapKinds::FireGradient, 64),
            37,
            23,
        )
        .unwrap();

        assert_eq!(renderer.render(&viewport).unwrap(), expected);
    }

    #[test]
    fn test_switching_palette_changes_inside_colour() {
        let viewport = default_viewport(10, 10);
        let mut renderer = FrameRenderer::new(50, 4.0, MandelbrotColourMapKinds::GlowGradient).unwrap();
        let centre = Point { x: 5, y: 5 };

        assert_eq!(renderer.render(&viewport).unwrap().pixel(centre).unwrap(), Colour::LIGHT_BLUE);

        renderer.set_colour_map_kind(MandelbrotColourMapKinds::FireGradient);

        assert_eq!(renderer.colour_map_kind(), MandelbrotColourMapKinds::FireGradient);
        assert_eq!(renderer.render(&viewport).unwrap().pixel(centre).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        assert!(matches!(
            FrameRenderer::new(0, 4.0, MandelbrotColourMapKinds::GlowGradient),
            Err(MandelbrotError::ZeroMaxIterations)
        ));
        assert!(matches!(
            FrameRenderer::new(10, -1.0, MandelbrotColourMapKinds::GlowGradient),
            Err(MandelbrotError::InvalidBoundThreshold(_))
        ));
    }
}
