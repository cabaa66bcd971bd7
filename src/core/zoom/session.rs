use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Progress of one animated zoom from its start viewport towards the fully
/// zoomed target.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomSession {
    start_viewport: Viewport,
    target_viewport: Viewport,
    total_steps: u32,
    current_step: u32,
}

impl ZoomSession {
    /// Starts a session centred on `click_point`, shrinking by `zoom_factor`
    /// once per step.
    pub fn new(
        start_viewport: Viewport,
        click_point: Complex,
        zoom_factor: f64,
        total_steps: u32,
    ) -> Result<Self, ViewportError> {
        let total_factor = zoom_factor.powf(f64::from(total_steps));
        let target_viewport = start_viewport.recentered(
            click_point,
            start_viewport.width() * total_factor,
            start_viewport.height() * total_factor,
        )?;

        Ok(Self {
            start_viewport,
            target_viewport,
            total_steps,
            current_step: 0,
        })
    }

    #[must_use]
    pub fn target_viewport(&self) -> &Viewport {
        &self.target_viewport
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[must_use]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            return 1.0;
        }
        f64::from(self.current_step) / f64::from(self.total_steps)
    }

    /// Produces the viewport for the current step and moves to the next one.
    ///
    /// Returns `None` once every step has been produced, or when the next
    /// viewport would be narrower than `min_precision_floor` on either axis.
    pub fn advance(&mut self, min_precision_floor: f64) -> Option<Viewport> {
        if self.current_step >= self.total_steps {
            return None;
        }

        let viewport =
            Viewport::interpolated(&self.start_viewport, &self.target_viewport, self.progress())
                .ok()?;

        if viewport.width() < min_precision_floor || viewport.height() < min_precision_floor {
            return None;
        }

        self.current_step += 1;

        Some(viewport)
    }
}
