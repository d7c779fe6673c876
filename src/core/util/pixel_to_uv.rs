use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::uv::Uv;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToUvError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToUvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToUvError {}

/// Maps a raster pixel to texture coordinates. `u` runs 0 to 1 left to
/// right and `v` runs 1 to 0 top to bottom, both edges inclusive.
pub fn pixel_to_uv(pixel_position: Point, pixel_rect: PixelRect) -> Result<Uv, PixelToUvError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToUvError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_pixel_y = f64::from(pixel_position.y - pixel_rect.top_left().y);
    let u = relative_pixel_x / f64::from(pixel_rect.width() - 1);
    let v = 1.0 - relative_pixel_y / f64::from(pixel_rect.height() - 1);

    Ok(Uv { u, v })
}
