//! Viewport navigation: instant recentring zooms and animated zoom sessions.
//!
//! The [`controller::ZoomController`] owns the current viewport and is its
//! only mutator. Animated zooms are advanced by discrete `tick()` calls so
//! the display surface decides when the next frame happens.

pub mod controller;
pub mod errors;
pub mod mode;
pub mod session;
pub mod settings;
