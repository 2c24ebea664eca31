use crate::core::actions::generate_raster::generate_raster::GenerateRasterError;
use crate::core::data::raster::RasterError;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use std::error::Error;
use std::fmt;

/// A recomputation that could not produce a raster.
///
/// The engine keeps its previous view and raster when this is returned.
#[derive(Debug, PartialEq)]
pub enum RenderError {
    ColourMap(MandelbrotColourMapError),
    Raster(RasterError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Raster(err) => write!(f, "raster error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::Raster(err) => Some(err),
        }
    }
}

impl From<GenerateRasterError<MandelbrotColourMapError>> for RenderError {
    fn from(err: GenerateRasterError<MandelbrotColourMapError>) -> Self {
        match err {
            GenerateRasterError::ColourMap(err) => Self::ColourMap(err),
            GenerateRasterError::Raster(err) => Self::Raster(err),
        }
    }
}
