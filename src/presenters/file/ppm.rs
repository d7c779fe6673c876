use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary PPM images. PPM has no alpha channel, so discarded pixels
/// are filled with the backdrop colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmFilePresenter {
    backdrop: Colour,
}

impl FilePresenterPort for PpmFilePresenter {
    fn file_extension(&self) -> &'static str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        self.write_to(buffer, &mut file)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self::with_backdrop(Colour::WHITE)
    }

    pub fn with_backdrop(backdrop: Colour) -> Self {
        Self { backdrop }
    }

    pub fn backdrop(&self) -> Colour {
        self.backdrop
    }

    pub fn write_to(&self, buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", width, height)?;
        writeln!(writer, "255")?;
        writer.write_all(&buffer.composite_rgb(self.backdrop))?;

        Ok(())
    }
}
