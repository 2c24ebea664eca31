use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::raster::{Raster, RasterError};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GenerateRasterError<E> {
    ColourMap(E),
    Raster(RasterError),
}

impl<E: fmt::Display> fmt::Display for GenerateRasterError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Raster(err) => write!(f, "raster error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GenerateRasterError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::Raster(err) => Some(err),
        }
    }
}

/// Colours row-major per-pixel `values` into a raster of `size`.
///
/// Fails if any value cannot be mapped or if the number of values does not
/// match the raster size.
pub fn generate_raster<T, CMap: ColourMap<T>>(
    values: Vec<T>,
    mapper: &CMap,
    size: PixelSize,
) -> Result<Raster, GenerateRasterError<CMap::Failure>> {
    let mut data = Vec::with_capacity(size.pixel_count() * 3);

    for value in values {
        let Colour { r, g, b } = mapper.map(value).map_err(GenerateRasterError::ColourMap)?;

        data.extend_from_slice(&[r, g, b]);
    }

    Raster::from_data(size, data).map_err(GenerateRasterError::Raster)
}
