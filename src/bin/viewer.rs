fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    mandelbrot_viewer::run_gui(mandelbrot_viewer::EngineConfig::default())?;

    Ok(())
}
