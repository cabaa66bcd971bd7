//! Windowed adapter for interactive zooming.
//!
//! Uses winit for window management, pixels for the framebuffer and egui for
//! the control panel.

pub mod app;
pub mod commands;
pub mod errors;
