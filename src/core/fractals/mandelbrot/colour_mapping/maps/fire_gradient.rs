use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::{
    MandelbrotColourMapError, check_iterations,
};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

/// Black through red, orange and yellow to white as the escape count rises.
// Darkest red an escaped pixel may get; black is reserved for the set.
const ESCAPED_FLOOR: f64 = 32.0;

#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotFireGradient {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        check_iterations(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = iterations as f64 / self.max_iterations as f64;
        // Position within the current quarter of the gradient.
        let local_t = (t % 0.25) / 0.25;

        let colour = match (t * 4.0) as u32 {
            0 => Colour::new((ESCAPED_FLOOR + local_t * (255.0 - ESCAPED_FLOOR)) as u8, 0, 0),
            1 => Colour::new(255, (local_t * 165.0) as u8, 0),
            2 => Colour::new(255, (165.0 + local_t * 90.0) as u8, 0),
            _ => Colour::new(255, 255, (local_t * 255.0) as u8),
        };

        Ok(colour)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
