use crate::controllers::explorer::data::frame_data::FrameData;

/// Receives every frame the explorer renders.
pub trait FramePresenterPort {
    type Error: std::error::Error + Send + Sync + 'static;

    fn present(&mut self, frame: FrameData) -> Result<(), Self::Error>;
}
