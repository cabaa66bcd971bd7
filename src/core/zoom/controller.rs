use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::errors::ZoomError;
use crate::core::zoom::mode::ZoomMode;
use crate::core::zoom::session::ZoomSession;
use crate::core::zoom::settings::ZoomSettings;

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomState {
    Idle,
    Animating(ZoomSession),
}

/// What a zoom request did.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomTrigger {
    /// The viewport changed once and should be rendered.
    Zoomed(Viewport),
    /// A session began; frames arrive through [`ZoomController::tick`].
    AnimationStarted,
    /// A session was already running, nothing changed.
    Ignored,
    /// The view is too narrow to zoom any further, nothing changed.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct ZoomController {
    initial_viewport: Viewport,
    viewport: Viewport,
    settings: ZoomSettings,
    state: ZoomState,
}

impl ZoomController {
    #[must_use]
    pub fn new(initial_viewport: Viewport, settings: ZoomSettings) -> Self {
        Self {
            initial_viewport,
            viewport: initial_viewport,
            settings,
            state: ZoomState::Idle,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, ZoomState::Animating(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&ZoomSession> {
        match &self.state {
            ZoomState::Idle => None,
            ZoomState::Animating(session) => Some(session),
        }
    }

    fn clicked_point(&self, click: Point) -> Result<Complex, ZoomError> {
        if !self.viewport.contains_pixel(click) {
            tracing::warn!(click_x = click.x, click_y = click.y, "click outside raster");
            return Err(ZoomError::ClickOutsideRaster {
                click,
                width: self.viewport.pixel_width(),
                height: self.viewport.pixel_height(),
            });
        }

        Ok(self.viewport.pixel_to_plane(click.x, click.y))
    }

    /// Dispatches a click to the zoom flavour selected by `mode`.
    pub fn trigger(&mut self, click: Point, mode: ZoomMode) -> Result<ZoomTrigger, ZoomError> {
        match mode {
            ZoomMode::Instant => self.instant_zoom(click).map(ZoomTrigger::Zoomed),
            ZoomMode::Animated => self.start_animated_zoom(click),
        }
    }

    /// Recentres on the clicked point and shrinks both extents by the instant
    /// factor. Always allowed; an active animation is abandoned.
    pub fn instant_zoom(&mut self, click: Point) -> Result<Viewport, ZoomError> {
        let center = self.clicked_point(click)?;
        let factor = self.settings.instant_zoom_factor;
        let viewport = self.viewport.recentered(
            center,
            self.viewport.width() * factor,
            self.viewport.height() * factor,
        )?;

        if self.is_animating() {
            tracing::info!("instant zoom supersedes the running animation");
        }

        self.state = ZoomState::Idle;
        self.viewport = viewport;

        tracing::info!(
            click_x = click.x,
            click_y = click.y,
            real = center.real,
            imag = center.imag,
            width = viewport.width(),
            "instant zoom"
        );

        Ok(viewport)
    }

    /// Begins an animated zoom towards the clicked point. A request made
    /// while a session is running is dropped.
    pub fn start_animated_zoom(&mut self, click: Point) -> Result<ZoomTrigger, ZoomError> {
        if self.is_animating() {
            tracing::debug!(click_x = click.x, click_y = click.y, "animation running, zoom ignored");
            return Ok(ZoomTrigger::Ignored);
        }

        let center = self.clicked_point(click)?;
        let session = match ZoomSession::new(
            self.viewport,
            center,
            self.settings.animated_zoom_factor,
            self.settings.animated_zoom_steps,
        ) {
            Ok(session) => session,
            Err(err) => {
                tracing::info!(
                    width = self.viewport.width(),
                    height = self.viewport.height(),
                    %err,
                    "view collapsed, animated zoom ended"
                );
                return Ok(ZoomTrigger::Exhausted);
            }
        };

        tracing::info!(
            click_x = click.x,
            click_y = click.y,
            real = center.real,
            imag = center.imag,
            steps = session.total_steps(),
            "animated zoom started"
        );

        self.state = ZoomState::Animating(session);

        Ok(ZoomTrigger::AnimationStarted)
    }

    /// Advances the running session by one frame, returning the viewport to
    /// render. Returns `None` when idle or when the session just finished.
    pub fn tick(&mut self) -> Option<Viewport> {
        let ZoomState::Animating(session) = &mut self.state else {
            return None;
        };

        match session.advance(self.settings.min_precision_floor) {
            Some(viewport) => {
                tracing::debug!(
                    step = session.current_step(),
                    total = session.total_steps(),
                    "animation tick"
                );
                self.viewport = viewport;
                Some(viewport)
            }
            None => {
                tracing::info!(
                    steps = session.current_step(),
                    "animated zoom finished"
                );
                self.state = ZoomState::Idle;
                None
            }
        }
    }

    /// Drops the running session, keeping whatever viewport was reached.
    pub fn cancel(&mut self) {
        if self.is_animating() {
            tracing::debug!("animated zoom abandoned");
        }
        self.state = ZoomState::Idle;
    }

    /// Returns to the initial viewport.
    pub fn reset(&mut self) -> Viewport {
        self.state = ZoomState::Idle;
        self.viewport = self.initial_viewport;
        self.viewport
    }
}
