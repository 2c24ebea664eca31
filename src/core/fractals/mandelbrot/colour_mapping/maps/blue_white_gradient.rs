use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::{
    MandelbrotColourMapError, check_iterations,
};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

// The polynomials vanish at both ends; keep `t` inside this margin so no
// escaped count comes out black.
const T_MARGIN: f64 = 0.05;

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotBlueWhiteGradient {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        check_iterations(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = T_MARGIN
            + (1.0 - 2.0 * T_MARGIN) * (iterations as f64 / self.max_iterations as f64);
        let u = 1.0 - t;

        // Bernstein-style polynomials: deep blue early, bright near the set.
        Ok(Colour::new(
            (9.0 * u * t * t * t * 255.0) as u8,
            (15.0 * u * u * t * t * 255.0) as u8,
            (8.5 * u * u * u * t * 255.0) as u8,
        ))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::BlueWhiteGradient
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
