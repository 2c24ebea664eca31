use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Evaluates `algorithm` for every pixel on the calling thread.
///
/// Results are in row-major order, one per pixel of `pixel_size`.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_size: PixelSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = pixel_size.width() as i32;
    let height = pixel_size.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
