//! Application layer for zooming around the Mandelbrot set.
//!
//! The explorer follows the ports & adapters pattern:
//! - **Input**: pixel clicks with a [`ZoomMode`](crate::core::zoom::mode::ZoomMode)
//!   and per-frame `tick()` calls from the display surface
//! - **Output**: the [`FramePresenterPort`](ports::frame_presenter::FramePresenterPort)
//!   receiving every rendered frame
//! - **Core**: the zoom controller and frame renderer from `core/`

pub mod config;
pub mod controller;
pub mod data;
pub mod errors;
pub mod ports;
