use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Colour map over escape counts. `max_iterations` always maps to black.
pub trait MandelbrotColourMap:
    ColourMap<u32, Failure = MandelbrotColourMapError> + Send + Sync
{
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<u32> for Box<dyn MandelbrotColourMap> {
    type Failure = MandelbrotColourMapError;

    fn map(&self, value: u32) -> Result<Colour, Self::Failure> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
