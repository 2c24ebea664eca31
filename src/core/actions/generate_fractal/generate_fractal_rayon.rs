use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Evaluates `algorithm` for every pixel using rayon's work-stealing pool.
///
/// Rows are computed in parallel and flattened back into row-major order, so
/// the output matches [`generate_fractal`](super::generate_fractal::generate_fractal)
/// exactly. Nothing is returned until the whole sweep has finished.
pub fn generate_fractal_rayon<Alg>(
    pixel_size: PixelSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = pixel_size.width() as i32;
    let height = pixel_size.height() as i32;

    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x * 31 + pixel.y * 7) as u64)
        }
    }

    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm {};
        let size = PixelSize::new(37, 23).unwrap();

        let serial = generate_fractal(size, &algorithm).unwrap();
        let parallel = generate_fractal_rayon(size, &algorithm).unwrap();

        assert_eq!(parallel, serial);
        assert_eq!(parallel.len(), 37 * 23);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let size = PixelSize::new(3, 4).unwrap();

        let result = generate_fractal_rayon(size, &StubFailureAlgorithm {});

        assert_eq!(result, Err(StubError {}));
    }
}
