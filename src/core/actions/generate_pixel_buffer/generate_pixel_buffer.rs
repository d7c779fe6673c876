use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, DISCARDED, OPAQUE, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(&**err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps row-major `input` through `mapper` into an RGBA buffer covering
/// `pixel_rect`.
///
/// Streams straight into a buffer preallocated to the final size; a length
/// mismatch between `input` and `pixel_rect` is reported once all values
/// have been mapped.
pub fn generate_pixel_buffer<CMap>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap,
    CMap::Failure: Send + Sync + 'static,
{
    let buffer_size = pixel_rect.size() as usize * BYTES_PER_PIXEL;
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for value in input {
        let rgba = match mapper
            .map(value)
            .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?
        {
            Some(colour) => [colour.r, colour.g, colour.b, OPAQUE],
            None => DISCARDED,
        };

        buffer.extend_from_slice(&rgba);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
