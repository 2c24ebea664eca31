mod adapters;
mod controllers;
mod core;
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use adapters::pixel_format::{FrameSizeMismatch, copy_raster_into_rgba_frame};
pub use controllers::engine::{
    EngineConfig, EngineRequest, FractalEngine, RenderError, RenderStrategy,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_size::{PixelSize, PixelSizeError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::precision::{Precision, PrecisionChange, PrecisionError};
pub use crate::core::viewport::{MIN_HEIGHT, MIN_WIDTH, Viewport, ViewportError};
pub use input::selection::SelectionTracker;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
