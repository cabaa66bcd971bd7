use std::time::Instant;

use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::FrameRenderer;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::zoom::controller::{ZoomController, ZoomTrigger};
use crate::core::zoom::mode::ZoomMode;

/// Routes zoom requests to the [`ZoomController`], renders every viewport it
/// produces and hands the frames to the presenter.
pub struct ExplorerController<P: FramePresenterPort> {
    zoom: ZoomController,
    renderer: FrameRenderer,
    presenter: P,
    frames_rendered: u64,
}

impl<P: FramePresenterPort> ExplorerController<P> {
    pub fn new(config: &ExplorerConfig, presenter: P) -> Result<Self, ExplorerError> {
        config.validate()?;

        let renderer = FrameRenderer::new(
            config.max_iterations,
            config.bound_threshold,
            config.colour_map,
        )?;
        let zoom = ZoomController::new(config.initial_viewport()?, config.zoom);

        Ok(Self {
            zoom,
            renderer,
            presenter,
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.zoom.viewport()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom.is_animating()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.renderer.colour_map_kind()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Renders the current viewport without changing it.
    pub fn render_current(&mut self) -> Result<(), ExplorerError> {
        let viewport = *self.zoom.viewport();
        self.render(viewport)
    }

    /// Handles a click on the raster. Instant zooms render immediately;
    /// animated zooms render on the following ticks.
    pub fn click(&mut self, click: Point, mode: ZoomMode) -> Result<ZoomTrigger, ExplorerError> {
        let trigger = self.zoom.trigger(click, mode)?;

        if let ZoomTrigger::Zoomed(viewport) = &trigger {
            self.render(*viewport)?;
        }

        Ok(trigger)
    }

    /// Advances a running animation by one frame. Returns `false` once there
    /// is nothing left to render.
    pub fn tick(&mut self) -> Result<bool, ExplorerError> {
        match self.zoom.tick() {
            Some(viewport) => {
                self.render(viewport)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Ticks until the running animation ends, returning the number of
    /// frames rendered.
    pub fn run_animation(&mut self) -> Result<u32, ExplorerError> {
        let mut frames = 0;

        while self.tick()? {
            frames += 1;
        }

        Ok(frames)
    }

    pub fn cancel(&mut self) {
        self.zoom.cancel();
    }

    /// Returns to the initial viewport and renders it.
    pub fn reset(&mut self) -> Result<(), ExplorerError> {
        let viewport = self.zoom.reset();
        tracing::info!("view reset");
        self.render(viewport)
    }

    /// Switches palette and re-renders the current viewport.
    pub fn set_colour_map_kind(&mut self, kind: MandelbrotColourMapKinds) -> Result<(), ExplorerError> {
        if kind == self.renderer.colour_map_kind() {
            return Ok(());
        }

        self.renderer.set_colour_map_kind(kind);
        tracing::info!(palette = %kind, "palette changed");
        self.render_current()
    }

    fn render(&mut self, viewport: Viewport) -> Result<(), ExplorerError> {
        let start = Instant::now();
        let pixel_buffer = self.renderer.render(&viewport)?;

        let frame = FrameData {
            frame_number: self.frames_rendered,
            viewport,
            pixel_buffer,
            render_duration: start.elapsed(),
        };
        self.frames_rendered += 1;

        self.presenter
            .present(frame)
            .map_err(|err| ExplorerError::Presenter(Box::new(err)))
    }
}
