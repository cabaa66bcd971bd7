use thiserror::Error;

use crate::controllers::explorer::errors::ExplorerError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
}
