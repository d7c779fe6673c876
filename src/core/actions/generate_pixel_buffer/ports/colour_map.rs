use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one evaluated pixel into its final colour. `None` leaves the pixel
/// discarded.
pub trait ColourMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<Option<Colour>, Self::Failure>;
}
