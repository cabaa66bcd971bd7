use std::marker::PhantomData;

use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::controller::ExplorerController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    config: ExplorerConfig,
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(config: ExplorerConfig, presenter_factory: F) -> Self {
        Self {
            config,
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let raster_width = self.config.pixel_width;
        let raster_height = self.config.pixel_height;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Zoom")
                .with_inner_size(PhysicalSize::new(raster_width, raster_height))
                .with_min_inner_size(PhysicalSize::new(200, 200))
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window, raster_width, raster_height)?;
        let explorer = ExplorerController::new(&self.config, presenter)?;
        let mut app = GuiApp::new(window, &event_loop, explorer);
        app.render_initial_frame()?;

        tracing::info!(width = raster_width, height = raster_height, "window opened");

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        app.cursor_moved(position.x as f32, position.y as f32);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        app.cursor_left();
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !egui_consumed => {
                        if app.click() {
                            redraw_pending = true;
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        // one animation step per displayed frame
                        app.tick();

                        let egui_output = app.update_ui(window);
                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                            || app.is_animating()
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            tracing::error!(%err, "render error");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
