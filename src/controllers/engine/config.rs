use crate::core::data::pixel_size::PixelSize;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

// Default window size.
const DEFAULT_PIXEL_SIZE: PixelSize = match PixelSize::new(1024, 765) {
    Ok(size) => size,
    Err(_) => panic!("default pixel size must be non-zero"),
};

const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// How the per-pixel sweep is scheduled. Both produce identical rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    Serial,
    #[default]
    Rayon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub pixel_size: PixelSize,
    /// Initial iteration depth; 0 is lifted to 1.
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub render_strategy: RenderStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            render_strategy: RenderStrategy::default(),
        }
    }
}
