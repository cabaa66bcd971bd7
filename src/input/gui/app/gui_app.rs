use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::explorer::errors::ExplorerError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::zoom::controller::ZoomTrigger;
use crate::core::zoom::mode::ZoomMode;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAppState, viewport_readout};

pub struct GuiApp<P: GuiPresenterPort> {
    explorer: ExplorerController<P>,
    ui_state: GuiAppState,
    pub scale_factor: f64,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(window: &'static Window, event_loop: &EventLoop<()>, explorer: ExplorerController<P>) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            ui_state: GuiAppState::new(explorer.colour_map_kind()),
            explorer,
            scale_factor,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render_initial_frame(&mut self) -> Result<(), ExplorerError> {
        self.explorer.render_current()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.explorer.is_animating()
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.explorer.presenter_mut().render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.explorer.presenter_mut().resize_surface(width, height) {
            tracing::error!(%err, "failed to resize surface");
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.ui_state.cursor_moved(x, y);
    }

    pub fn cursor_left(&mut self) {
        self.ui_state.cursor_left();
    }

    /// Zooms at the cursor. Returns `true` when the window needs a redraw.
    pub fn click(&mut self) -> bool {
        let Some(position) = self.ui_state.cursor_position() else {
            return false;
        };
        let Some(point) = self.explorer.presenter().window_pos_to_pixel(position) else {
            tracing::debug!(x = position.0, y = position.1, "click outside image");
            return false;
        };

        match self.explorer.click(point, self.ui_state.zoom_mode) {
            Ok(ZoomTrigger::Ignored | ZoomTrigger::Exhausted) => false,
            Ok(_) => {
                self.ui_state.clear_error();
                true
            }
            Err(err) => {
                self.ui_state.record_error(err.to_string());
                true
            }
        }
    }

    /// Renders the next animation frame, if any. Returns `true` when a frame
    /// was produced.
    pub fn tick(&mut self) -> bool {
        match self.explorer.tick() {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::error!(%err, "animation frame failed");
                self.explorer.cancel();
                self.ui_state.record_error(err.to_string());
                false
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.explorer.cancel();
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let readout = viewport_readout(self.explorer.viewport());
        let animating = self.explorer.is_animating();
        let last_render_duration = self.explorer.presenter().last_render_duration();
        let ui_state = &mut self.ui_state;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Zoom")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 200.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot Zoom");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Zoom mode:");
                        for &mode in ZoomMode::ALL {
                            let label = match mode {
                                ZoomMode::Instant => "Instant",
                                ZoomMode::Animated => "Animated",
                            };
                            ui.radio_value(&mut ui_state.zoom_mode, mode, label);
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("mandelbrot_colour_map")
                            .selected_text(ui_state.colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKinds::ALL {
                                    ui.selectable_value(
                                        &mut ui_state.colour_map_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.separator();
                    ui.label("View region:");
                    for line in &readout {
                        ui.label(line);
                    }

                    if ui.button("Reset view").clicked() {
                        ui_state.reset_requested = true;
                    }

                    ui.separator();
                    if animating {
                        ui.label("Animating...");
                    }
                    if let Some(render_duration) = last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = ui_state.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        self.apply_panel_changes();

        output
    }

    fn apply_panel_changes(&mut self) {
        let kind = self.ui_state.colour_map_kind;

        if kind != self.explorer.colour_map_kind() {
            if let Err(err) = self.explorer.set_colour_map_kind(kind) {
                self.ui_state.record_error(err.to_string());
            }
        }

        if self.ui_state.take_reset_request() {
            match self.explorer.reset() {
                Ok(()) => self.ui_state.clear_error(),
                Err(err) => self.ui_state.record_error(err.to_string()),
            }
        }
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
