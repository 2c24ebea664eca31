use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::{
    MandelbrotColourMapError, check_iterations,
};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

const PALETTE_SIZE: usize = 256;
const SATURATION: f64 = 0.85;
const VALUE: f64 = 0.95;

/// Fixed HSV palette indexed by `iterations mod 256`.
///
/// Unlike the gradients, band colours do not shift when the precision
/// changes, which keeps deep zooms readable.
#[derive(Debug)]
pub struct MandelbrotHueCycle {
    max_iterations: u32,
    palette: Vec<Colour>,
}

impl ColourMap<u32> for MandelbrotHueCycle {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        check_iterations(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        Ok(self.palette[iterations as usize % PALETTE_SIZE])
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotHueCycle {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::HueCycle
    }
}

impl MandelbrotHueCycle {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        let palette = (0..PALETTE_SIZE)
            .map(|i| hsv_to_colour(i as f64 / PALETTE_SIZE as f64 * 360.0, SATURATION, VALUE))
            .collect();

        Self {
            max_iterations,
            palette,
        }
    }
}

fn hsv_to_colour(hue: f64, saturation: f64, value: f64) -> Colour {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |c: f64| ((c + m) * 255.0).round() as u8;
    Colour::new(channel(r), channel(g), channel(b))
}
