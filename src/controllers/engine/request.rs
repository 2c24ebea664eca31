use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::precision::PrecisionChange;

/// A view change decoded by the host from its input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineRequest {
    /// Zoom onto the rectangle between the press and release positions.
    Zoom { press: Point, release: Point },
    Reset,
    Precision(PrecisionChange),
    Resize(PixelSize),
}
