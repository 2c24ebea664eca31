use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Smallest raster a resize may produce.
pub const MIN_WIDTH: u32 = 800;
pub const MIN_HEIGHT: u32 = 600;

// Region shown at launch and on reset: the whole connected set with a margin.
const FULL_VIEW_TOP_LEFT: Complex = Complex::new(-2.5, -1.25);
const FULL_VIEW_BOTTOM_RIGHT: Complex = Complex::new(1.0, 1.25);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
    NonFiniteOrigin { top_left: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be finite and positive: {}", scale)
            }
            Self::NonFiniteOrigin { top_left } => {
                write!(
                    f,
                    "viewport origin must be finite: ({}, {})",
                    top_left.real, top_left.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Mapping between raster pixels and the complex plane.
///
/// Pixel `(x, y)` maps to `top_left + (x * scale, y * scale)`: the real part
/// grows to the right and the imaginary part grows downwards, so `top_left`
/// always holds the smallest real and imaginary parts on screen. The same
/// `scale` applies to both axes, keeping pixels square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pixel_size: PixelSize,
    top_left: Complex,
    scale: f64,
}

impl Viewport {
    /// Creates a viewport showing the full view at `pixel_size`.
    #[must_use]
    pub fn new(pixel_size: PixelSize) -> Self {
        Self::fit(
            pixel_size,
            FULL_VIEW_TOP_LEFT,
            FULL_VIEW_BOTTOM_RIGHT.real - FULL_VIEW_TOP_LEFT.real,
            FULL_VIEW_BOTTOM_RIGHT.imag - FULL_VIEW_TOP_LEFT.imag,
        )
    }

    pub fn from_parts(
        pixel_size: PixelSize,
        top_left: Complex,
        scale: f64,
    ) -> Result<Self, ViewportError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ViewportError::InvalidScale { scale });
        }

        if !(top_left.real.is_finite() && top_left.imag.is_finite()) {
            return Err(ViewportError::NonFiniteOrigin { top_left });
        }

        Ok(Self {
            pixel_size,
            top_left,
            scale,
        })
    }

    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    /// Complex-plane units per pixel on either axis.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.top_left
            + Complex::new(
                self.pixel_size.width() as f64 * self.scale,
                self.pixel_size.height() as f64 * self.scale,
            )
    }

    /// Maps any pixel position, inside the raster or not, onto the plane.
    #[must_use]
    pub fn map_pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex::new(
            self.top_left.real + pixel.x as f64 * self.scale,
            self.top_left.imag + pixel.y as f64 * self.scale,
        )
    }

    /// Zooms so the region between `p0` and `p1` fills the raster.
    ///
    /// The axis with spare room is widened around the selection's centre so
    /// nothing selected is cropped. Returns `false`, leaving the viewport
    /// untouched, when the selection has no area (or none that `f64` can
    /// resolve) or the fitted view equals the current one.
    pub fn zoom_to_rectangle(&mut self, p0: Point, p1: Point) -> bool {
        if p0.x == p1.x || p0.y == p1.y {
            return false;
        }

        let Ok(selection) =
            ComplexRect::spanning(self.map_pixel_to_complex(p0), self.map_pixel_to_complex(p1))
        else {
            return false;
        };

        let candidate = Self::fit(
            self.pixel_size,
            selection.top_left(),
            selection.width(),
            selection.height(),
        );

        if !candidate.is_resolvable() || candidate == *self {
            return false;
        }

        *self = candidate;
        true
    }

    pub fn reset_to_full_view(&mut self) {
        *self = Self::new(self.pixel_size);
    }

    /// Changes the pixel extent, clamped up to [`MIN_WIDTH`] x [`MIN_HEIGHT`].
    ///
    /// `top_left` and `scale` are kept, so the window reveals or hides plane
    /// area on its right and bottom edges instead of rescaling the view.
    /// Returns the size actually applied.
    pub fn resize(&mut self, requested: PixelSize) -> PixelSize {
        self.pixel_size = requested.at_least(MIN_WIDTH, MIN_HEIGHT);
        self.pixel_size
    }

    fn fit(pixel_size: PixelSize, top_left: Complex, width: f64, height: f64) -> Self {
        let pixel_width = pixel_size.width() as f64;
        let pixel_height = pixel_size.height() as f64;
        let scale = (width / pixel_width).max(height / pixel_height);

        let padding = Complex::new(
            (pixel_width * scale - width) / 2.0,
            (pixel_height * scale - height) / 2.0,
        );

        Self {
            pixel_size,
            top_left: top_left - padding,
            scale,
        }
    }

    // Adjacent pixels must still map to distinct plane coordinates.
    fn is_resolvable(&self) -> bool {
        let bottom_right = self.bottom_right();

        self.scale.is_finite()
            && self.scale > 0.0
            && self.top_left.real.is_finite()
            && self.top_left.imag.is_finite()
            && self.top_left.real + self.scale > self.top_left.real
            && self.top_left.imag + self.scale > self.top_left.imag
            && bottom_right.real.is_finite()
            && bottom_right.imag.is_finite()
    }
}
