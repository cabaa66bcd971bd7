use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary PPM image.
pub fn write_ppm(buffer: &PixelBuffer, mut writer: impl Write) -> io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

/// Saves every frame as `frame_NNNN.ppm` inside an output directory.
pub struct PpmFilePresenter {
    output_dir: PathBuf,
}

impl FramePresenterPort for PpmFilePresenter {
    type Error = io::Error;

    fn present(&mut self, frame: FrameData) -> Result<(), Self::Error> {
        let path = self.frame_path(frame.frame_number);
        let file = fs::File::create(&path)?;

        write_ppm(&frame.pixel_buffer, BufWriter::new(file))?;

        tracing::debug!(
            path = %path.display(),
            render_ms = frame.render_duration.as_millis() as u64,
            "frame written"
        );

        Ok(())
    }
}

impl PpmFilePresenter {
    /// Creates the output directory if it does not exist yet.
    pub fn new(output_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;

        Ok(Self { output_dir })
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn frame_path(&self, frame_number: u64) -> PathBuf {
        self.output_dir.join(format!("frame_{frame_number:04}.ppm"))
    }
}
