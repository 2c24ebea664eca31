use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn raster_byte_len(size: PixelSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    SizeMismatch { expected_len: usize, actual_len: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "raster needs {} bytes but {} were supplied",
                    expected_len, actual_len
                )
            }
        }
    }
}

impl Error for RasterError {}

/// Row-major RGB pixel data, exactly `size.width() * size.height()` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    size: PixelSize,
    data: Vec<u8>,
}

impl Raster {
    /// Creates an all-black raster.
    #[must_use]
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            data: vec![0; raster_byte_len(size)],
        }
    }

    pub fn from_data(size: PixelSize, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected_len = raster_byte_len(size);

        if data.len() != expected_len {
            return Err(RasterError::SizeMismatch {
                expected_len,
                actual_len: data.len(),
            });
        }

        Ok(Self { size, data })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Colour at `pixel`, or `None` outside the raster.
    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if pixel.x < 0 || pixel.y < 0 {
            return None;
        }

        let (x, y) = (pixel.x as u32, pixel.y as u32);
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }

        let index = (y as usize * self.size.width() as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour::new(
            self.data[index],
            self.data[index + 1],
            self.data[index + 2],
        ))
    }
}
