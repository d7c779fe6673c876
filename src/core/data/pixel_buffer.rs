use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

pub(crate) const OPAQUE: u8 = 255;
pub(crate) const DISCARDED: [u8; BYTES_PER_PIXEL] = [0, 0, 0, 0];

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image. A pixel with alpha 0 was discarded by the kernel
/// and shows whatever the presenter places behind the fractal; every drawn
/// pixel is fully opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A buffer where every pixel starts out discarded.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_index(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL]
            .copy_from_slice(&[colour.r, colour.g, colour.b, OPAQUE]);

        Ok(())
    }

    pub fn discard_pixel(&mut self, pixel: Point) -> Result<(), PixelBufferError> {
        let index = self.byte_index(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&DISCARDED);

        Ok(())
    }

    /// The colour at `pixel`, or `None` when it was discarded.
    pub fn pixel(&self, pixel: Point) -> Result<Option<Colour>, PixelBufferError> {
        let index = self.byte_index(pixel)?;
        let rgba = &self.buffer[index..index + BYTES_PER_PIXEL];

        if rgba[3] == 0 {
            return Ok(None);
        }

        Ok(Some(Colour {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
        }))
    }

    #[must_use]
    pub fn discarded_count(&self) -> usize {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|rgba| rgba[3] == 0)
            .count()
    }

    /// RGB bytes with discarded pixels replaced by `backdrop`.
    #[must_use]
    pub fn composite_rgb(&self, backdrop: Colour) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_rect.size() as usize * 3);

        for rgba in self.buffer.chunks_exact(BYTES_PER_PIXEL) {
            if rgba[3] == 0 {
                rgb.extend_from_slice(&[backdrop.r, backdrop.g, backdrop.b]);
            } else {
                rgb.extend_from_slice(&rgba[..3]);
            }
        }

        rgb
    }

    fn byte_index(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        self.pixel_rect
            .index_of(pixel)
            .map(|index| index * BYTES_PER_PIXEL)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })
    }
}
