//! Pixel format conversion for surfaces that expect RGBA.

use crate::core::data::raster::Raster;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSizeMismatch {
    pub expected_len: usize,
    pub actual_len: usize,
}

impl fmt::Display for FrameSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA frame holds {} bytes but the raster needs {}",
            self.actual_len, self.expected_len
        )
    }
}

impl Error for FrameSizeMismatch {}

/// Copies an RGB raster into an RGBA frame, setting alpha to 255.
///
/// The frame must hold exactly four bytes per raster pixel.
pub fn copy_raster_into_rgba_frame(raster: &Raster, frame: &mut [u8]) -> Result<(), FrameSizeMismatch> {
    let expected_len = raster.size().pixel_count() * 4;

    if frame.len() != expected_len {
        return Err(FrameSizeMismatch {
            expected_len,
            actual_len: frame.len(),
        });
    }

    for (src_pixel, dst_pixel) in raster.data().chunks_exact(3).zip(frame.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;

    #[test]
    fn test_copy_known_values() {
        let raster = Raster::from_data(
            PixelSize::new(2, 2).unwrap(),
            vec![
                255, 0, 0, // red
                0, 255, 0, // green
                0, 0, 255, // blue
                255, 255, 255, // white
            ],
        )
        .unwrap();
        let mut frame = vec![0; 16];

        copy_raster_into_rgba_frame(&raster, &mut frame).unwrap();

        assert_eq!(
            frame,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_overwrites_stale_alpha() {
        let raster = Raster::new(PixelSize::new(3, 1).unwrap());
        let mut frame = vec![7; 12];

        copy_raster_into_rgba_frame(&raster, &mut frame).unwrap();

        assert_eq!(frame, vec![0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_copy_rejects_wrong_frame_length() {
        let raster = Raster::new(PixelSize::new(4, 4).unwrap());
        let mut frame = vec![0; 60];

        assert_eq!(
            copy_raster_into_rgba_frame(&raster, &mut frame),
            Err(FrameSizeMismatch {
                expected_len: 64,
                actual_len: 60
            })
        );
    }
}
