use thiserror::Error;

use crate::controllers::explorer::config::ConfigError;
use crate::core::actions::render_frame::RenderError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::zoom::errors::ZoomError;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("zoom failed: {0}")]
    Zoom(#[from] ZoomError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("presenter failed: {0}")]
    Presenter(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<MandelbrotError> for ExplorerError {
    fn from(err: MandelbrotError) -> Self {
        Self::Render(RenderError::Algorithm(err))
    }
}
