use std::convert::Infallible;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::lyapunov::kernel::{Fragment, PixelSample};

/// Quantises kernel fragments to 8-bit colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FragmentColourMap;

impl ColourMap for FragmentColourMap {
    type T = PixelSample;
    type Failure = Infallible;

    fn map(&self, value: PixelSample) -> Result<Option<Colour>, Infallible> {
        Ok(match value.fragment {
            Fragment::Colour(rgb) => Some(rgb.to_colour()),
            Fragment::Discarded => None,
        })
    }
}
