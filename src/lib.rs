mod controllers;
mod core;
mod input;
mod logging;
mod presenters;

pub use controllers::explorer::config::{ConfigError, ExplorerConfig};
pub use controllers::explorer::controller::ExplorerController;
pub use controllers::explorer::data::frame_data::FrameData;
pub use controllers::explorer::errors::ExplorerError;
pub use controllers::explorer::ports::frame_presenter::FramePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::render_frame::{FrameRenderer, RenderError, render_frame};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_result::IterationResult;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, iterate};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::zoom::controller::{ZoomController, ZoomTrigger};
pub use crate::core::zoom::mode::ZoomMode;
pub use crate::core::zoom::settings::ZoomSettings;
pub use input::cli::args::CliArgs;
pub use input::cli::commands::run_cli::RunCliCommand;
pub use logging::init_logging;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
