use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps one per-pixel value (e.g. an escape count) to a display colour.
pub trait ColourMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
