use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::data::point::Point;

/// A frame presenter that also owns the window surface.
pub trait GuiPresenterPort: FramePresenterPort {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    /// Maps a physical window position onto the raster, `None` when it falls
    /// outside the rendered image.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point>;
    fn last_render_duration(&self) -> Option<Duration>;
}
