use std::time::Duration;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Shows frames in a window through a `pixels` framebuffer sized to the
/// raster, with the egui panel painted on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    has_frame: bool,
    last_render_duration: Option<Duration>,
}

impl FramePresenterPort for PixelsPresenter {
    type Error = PixelBufferError;

    fn present(&mut self, frame: FrameData) -> Result<(), Self::Error> {
        frame.pixel_buffer.copy_into_rgba(self.pixels.frame_mut())?;

        self.has_frame = true;
        self.last_render_duration = Some(frame.render_duration);

        Ok(())
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            // raster first, scaled to the surface
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the raster
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        self.pixels.resize_surface(width, height)
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point> {
        let (x, y) = self.pixels.window_pos_to_pixel(position).ok()?;

        Some(Point {
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
        })
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, raster_width: u32, raster_height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(raster_width, raster_height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            has_frame: false,
            last_render_duration: None,
        })
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }
}
