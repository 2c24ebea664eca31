use log::info;
use mandelbrot_viewer::{EngineConfig, FractalEngine, MandelbrotAlgorithm, Point, Precision};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .try_init();

    let engine = FractalEngine::new(EngineConfig::default())?;
    let viewport = engine.viewport();
    let size = viewport.pixel_size();

    let algorithm = MandelbrotAlgorithm::new(viewport, Precision::new(engine.precision())?);
    let in_set = (0..size.height() as i32)
        .flat_map(|y| (0..size.width() as i32).map(move |x| Point::new(x, y)))
        .filter(|&pixel| {
            algorithm.escape_time(viewport.map_pixel_to_complex(pixel)) == engine.precision()
        })
        .count();

    info!(
        "{} view from {:?} to {:?}",
        size,
        viewport.top_left(),
        viewport.bottom_right()
    );
    info!(
        "precision {}, {:.1}% of pixels in the set, rendered in {:?} with the {} colour map",
        engine.precision(),
        in_set as f64 * 100.0 / size.pixel_count() as f64,
        engine.last_render_duration(),
        engine.colour_map_kind().display_name()
    );

    Ok(())
}
