use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

/// One completed render, numbered from 0 in the order frames were produced.
#[derive(Debug)]
pub struct FrameData {
    pub frame_number: u64,
    pub viewport: Viewport,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
