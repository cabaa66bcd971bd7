use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::zoom::mode::ZoomMode;

/// Control panel selections and pointer tracking, kept apart from the window
/// so it can be tested headless.
#[derive(Debug, Default)]
pub struct GuiAppState {
    pub zoom_mode: ZoomMode,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub reset_requested: bool,
    cursor_position: Option<(f32, f32)>,
    last_error_message: Option<String>,
}

impl GuiAppState {
    #[must_use]
    pub fn new(colour_map_kind: MandelbrotColourMapKinds) -> Self {
        Self {
            colour_map_kind,
            ..Self::default()
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor_position = Some((x, y));
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = None;
    }

    #[must_use]
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }

    /// Returns and clears a pending reset request.
    pub fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error_message = None;
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

/// Panel readout lines for the plane bounds of `viewport`.
#[must_use]
pub fn viewport_readout(viewport: &Viewport) -> [String; 2] {
    [
        format!("Real: [{:.6e}, {:.6e}]", viewport.min_x(), viewport.max_x()),
        format!("Imag: [{:.6e}, {:.6e}]", viewport.min_y(), viewport.max_y()),
    ]
}
