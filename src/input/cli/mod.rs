//! Headless adapter: parses command-line arguments and writes every frame to
//! disk.

pub mod args;
pub mod commands;
