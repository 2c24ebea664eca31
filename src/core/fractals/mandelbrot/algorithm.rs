use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::precision::Precision;
use crate::core::viewport::Viewport;
use std::convert::Infallible;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time evaluation of `z -> z² + c` over a viewport.
#[derive(Debug, Copy, Clone)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, precision: Precision) -> Self {
        Self {
            viewport,
            max_iterations: precision.get(),
        }
    }

    /// Index of the first iteration whose result leaves the escape radius, or
    /// `max_iterations` if `c` stays bounded.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> u32 {
        if in_main_cardioid(c) || in_period2_bulb(c) {
            return self.max_iterations;
        }

        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = z * z + c;
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
        }

        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(self.escape_time(self.viewport.map_pixel_to_complex(pixel)))
    }
}

// Closed-form interior tests; these points never escape.
fn in_main_cardioid(c: Complex) -> bool {
    let shifted = c.real - 0.25;
    let imag_squared = c.imag * c.imag;
    let q = shifted * shifted + imag_squared;

    q * (q + shifted) <= 0.25 * imag_squared
}

fn in_period2_bulb(c: Complex) -> bool {
    (c.real + 1.0) * (c.real + 1.0) + c.imag * c.imag <= 0.0625
}
