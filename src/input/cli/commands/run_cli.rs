use std::time::Instant;

use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::zoom::controller::ZoomTrigger;
use crate::input::cli::args::{CliArgs, ZoomRequest};
use crate::presenters::file::ppm::PpmFilePresenter;

/// Replays the scripted zooms of [`CliArgs`], writing one PPM file per frame.
pub struct RunCliCommand {
    args: CliArgs,
}

impl RunCliCommand {
    #[must_use]
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config = self.args.explorer_config();
        config.validate()?;

        let presenter = PpmFilePresenter::new(&self.args.output_dir)?;
        let mut explorer = ExplorerController::new(&config, presenter)?;

        tracing::info!(
            width = config.pixel_width,
            height = config.pixel_height,
            max_iterations = config.max_iterations,
            palette = %config.colour_map,
            zooms = self.args.zooms.len(),
            "rendering"
        );

        let start = Instant::now();
        replay(&mut explorer, &self.args.zooms)?;

        tracing::info!(
            frames = explorer.frames_rendered(),
            output_dir = %explorer.presenter().output_dir().display(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "done"
        );

        Ok(())
    }
}

/// Renders the initial view, then each zoom in order. Animated zooms are
/// ticked to completion before the next request.
pub fn replay<P: FramePresenterPort>(
    explorer: &mut ExplorerController<P>,
    zooms: &[ZoomRequest],
) -> Result<(), ExplorerError> {
    explorer.render_current()?;

    for request in zooms {
        if explorer.click(request.click, request.mode)? == ZoomTrigger::AnimationStarted {
            let frames = explorer.run_animation()?;
            tracing::debug!(frames, "animation replayed");
        }
    }

    Ok(())
}
