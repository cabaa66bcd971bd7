//! Input adapters for the explorer.
//!
//! These receive clicks from a command line script or a window and translate
//! them into explorer requests.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
