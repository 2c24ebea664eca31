use crate::controllers::engine::config::{EngineConfig, RenderStrategy};
use crate::controllers::engine::errors::RenderError;
use crate::controllers::engine::request::EngineRequest;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_raster::generate_raster::generate_raster;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::precision::{Precision, PrecisionChange};
use crate::core::viewport::Viewport;
use log::{debug, info};
use std::time::{Duration, Instant};

pub struct FractalEngine {
    viewport: Viewport,
    precision: Precision,
    colour_map_kind: MandelbrotColourMapKinds,
    render_strategy: RenderStrategy,
    raster: Raster,
    last_render_duration: Duration,
}

impl FractalEngine {
    /// Builds the engine at the full view and renders it before returning.
    pub fn new(config: EngineConfig) -> Result<Self, RenderError> {
        let viewport = Viewport::new(config.pixel_size);
        let precision = Precision::clamped(config.max_iterations);

        let mut engine = Self {
            viewport,
            precision,
            colour_map_kind: config.colour_map_kind,
            render_strategy: config.render_strategy,
            raster: Raster::new(config.pixel_size),
            last_render_duration: Duration::ZERO,
        };

        engine.recompute(viewport, precision)?;

        info!(
            "Fractal engine ready: {} pixels, precision {}, {}, {:?} sweep",
            config.pixel_size, precision, config.colour_map_kind, config.render_strategy
        );

        Ok(engine)
    }

    /// Applies `request`, returning whether the raster was recomputed.
    pub fn handle(&mut self, request: EngineRequest) -> Result<bool, RenderError> {
        match request {
            EngineRequest::Zoom { press, release } => self.on_zoom_request(press, release),
            EngineRequest::Reset => self.on_reset_request().map(|()| true),
            EngineRequest::Precision(change) => self.on_precision_change(change),
            EngineRequest::Resize(size) => self.on_resize(size).map(|()| true),
        }
    }

    /// Zooms onto the selection between `press` and `release`.
    ///
    /// A selection without area leaves view and raster untouched and returns
    /// `Ok(false)`.
    pub fn on_zoom_request(&mut self, press: Point, release: Point) -> Result<bool, RenderError> {
        let mut candidate = self.viewport;

        if !candidate.zoom_to_rectangle(press, release) {
            debug!(
                "Ignoring zoom selection ({}, {})-({}, {}): no area to zoom onto",
                press.x, press.y, release.x, release.y
            );
            return Ok(false);
        }

        self.recompute(candidate, self.precision)?;
        Ok(true)
    }

    pub fn on_reset_request(&mut self) -> Result<(), RenderError> {
        let mut candidate = self.viewport;
        candidate.reset_to_full_view();

        self.recompute(candidate, self.precision)
    }

    /// Steps the iteration depth by 10, never below 1.
    ///
    /// Returns `Ok(false)` without recomputing when the depth is already at
    /// the floor and cannot decrease further.
    pub fn on_precision_change(&mut self, change: PrecisionChange) -> Result<bool, RenderError> {
        let precision = self.precision.apply(change);

        if precision == self.precision {
            return Ok(false);
        }

        self.recompute(self.viewport, precision)?;
        Ok(true)
    }

    /// Resizes the raster, keeping the view's top-left corner and scale.
    ///
    /// Sizes below the minimum window are clamped up.
    pub fn on_resize(&mut self, requested: PixelSize) -> Result<(), RenderError> {
        let mut candidate = self.viewport;
        let applied = candidate.resize(requested);

        if applied != requested {
            debug!("Resize to {} clamped to {}", requested, applied);
        }

        self.recompute(candidate, self.precision)
    }

    /// The most recently completed raster.
    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision.get()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.colour_map_kind
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Duration {
        self.last_render_duration
    }

    // Renders into a fresh raster and only then commits view, precision and
    // raster together, so a failure leaves the previous state intact.
    fn recompute(&mut self, viewport: Viewport, precision: Precision) -> Result<(), RenderError> {
        let start = Instant::now();
        let raster = render(viewport, precision, self.colour_map_kind, self.render_strategy)?;
        let render_duration = start.elapsed();

        self.viewport = viewport;
        self.precision = precision;
        self.raster = raster;
        self.last_render_duration = render_duration;

        let top_left = viewport.top_left();
        debug!(
            "Rendered {} at precision {} in {:?} (top-left {} {:+}i, scale {:e})",
            viewport.pixel_size(),
            precision,
            render_duration,
            top_left.real,
            top_left.imag,
            viewport.scale()
        );

        Ok(())
    }
}

fn render(
    viewport: Viewport,
    precision: Precision,
    colour_map_kind: MandelbrotColourMapKinds,
    render_strategy: RenderStrategy,
) -> Result<Raster, RenderError> {
    let pixel_size = viewport.pixel_size();
    let algorithm = MandelbrotAlgorithm::new(viewport, precision);

    let escape_times = match render_strategy {
        RenderStrategy::Serial => generate_fractal(pixel_size, &algorithm),
        RenderStrategy::Rayon => generate_fractal_rayon(pixel_size, &algorithm),
    }
    .unwrap_or_else(|never| match never {});

    let colour_map = mandelbrot_colour_map_factory(colour_map_kind, precision.get());

    Ok(generate_raster(escape_times, &colour_map, pixel_size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn size(width: u32, height: u32) -> PixelSize {
        PixelSize::new(width, height).unwrap()
    }

    fn small_engine(max_iterations: u32) -> FractalEngine {
        FractalEngine::new(EngineConfig {
            pixel_size: size(70, 50),
            max_iterations,
            colour_map_kind: MandelbrotColourMapKinds::HueCycle,
            render_strategy: RenderStrategy::Serial,
        })
        .unwrap()
    }

    #[test_log::test]
    fn test_new_renders_immediately() {
        let engine = small_engine(50);

        assert_eq!(engine.raster().size(), size(70, 50));
        assert_eq!(engine.precision(), 50);
        // Pixel (50, 25) is the origin, which is in the set.
        assert_eq!(engine.raster().pixel(Point::new(50, 25)), Some(Colour::BLACK));
        // The top-left corner escapes straight away.
        assert_ne!(engine.raster().pixel(Point::new(0, 0)), Some(Colour::BLACK));
    }

    #[test]
    fn test_fire_gradient_at_depth_one_separates_escaped_pixels() {
        let engine = FractalEngine::new(EngineConfig {
            pixel_size: size(70, 50),
            max_iterations: 1,
            colour_map_kind: MandelbrotColourMapKinds::FireGradient,
            render_strategy: RenderStrategy::Serial,
        })
        .unwrap();

        assert_ne!(engine.raster().pixel(Point::new(0, 0)), Some(Colour::BLACK));
        assert_eq!(engine.raster().pixel(Point::new(50, 25)), Some(Colour::BLACK));
    }

    #[test]
    fn test_new_lifts_zero_precision_to_one() {
        let engine = small_engine(0);

        assert_eq!(engine.precision(), 1);
    }

    #[test]
    fn test_degenerate_zoom_changes_nothing() {
        let mut engine = small_engine(40);
        let viewport = engine.viewport();
        let raster = engine.raster().clone();

        let recomputed = engine
            .on_zoom_request(Point::new(20, 10), Point::new(20, 10))
            .unwrap();

        assert!(!recomputed);
        assert_eq!(engine.viewport(), viewport);
        assert_eq!(engine.raster(), &raster);
    }

    #[test_log::test]
    fn test_zoom_recomputes_and_zooms_in() {
        let mut engine = small_engine(40);
        let scale = engine.viewport().scale();
        let raster = engine.raster().clone();

        let recomputed = engine
            .on_zoom_request(Point::new(30, 10), Point::new(50, 30))
            .unwrap();

        assert!(recomputed);
        assert!(engine.viewport().scale() < scale);
        assert_ne!(engine.raster(), &raster);
        assert_eq!(engine.raster().size(), size(70, 50));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = small_engine(30);
        let full_view = engine.viewport();

        engine
            .on_zoom_request(Point::new(5, 5), Point::new(25, 20))
            .unwrap();
        engine.on_reset_request().unwrap();
        let once = (engine.viewport(), engine.raster().clone());
        engine.on_reset_request().unwrap();

        assert_eq!(once.0, full_view);
        assert_eq!(engine.viewport(), once.0);
        assert_eq!(engine.raster(), &once.1);
    }

    #[test]
    fn test_precision_steps_and_floor() {
        let mut engine = small_engine(25);

        assert!(engine.on_precision_change(PrecisionChange::Increase).unwrap());
        assert_eq!(engine.precision(), 35);

        for _ in 0..4 {
            engine.on_precision_change(PrecisionChange::Decrease).unwrap();
        }
        assert_eq!(engine.precision(), 1);

        // Already at the floor: nothing to recompute.
        assert!(!engine.on_precision_change(PrecisionChange::Decrease).unwrap());
        assert_eq!(engine.precision(), 1);
    }

    #[test]
    fn test_precision_change_keeps_viewport() {
        let mut engine = small_engine(25);
        let viewport = engine.viewport();

        engine.on_precision_change(PrecisionChange::Increase).unwrap();

        assert_eq!(engine.viewport(), viewport);
    }

    #[test]
    fn test_resize_clamps_and_keeps_top_left() {
        let mut engine = small_engine(10);
        let top_left = engine.viewport().top_left();
        let scale = engine.viewport().scale();

        engine.on_resize(size(640, 480)).unwrap();

        assert_eq!(engine.raster().size(), size(800, 600));
        assert_eq!(engine.viewport().pixel_size(), size(800, 600));
        assert_eq!(engine.viewport().top_left(), top_left);
        assert_eq!(engine.viewport().scale(), scale);
    }

    #[test]
    fn test_handle_dispatches_requests() {
        let mut engine = small_engine(20);

        assert!(engine
            .handle(EngineRequest::Precision(PrecisionChange::Increase))
            .unwrap());
        assert_eq!(engine.precision(), 30);

        assert!(!engine
            .handle(EngineRequest::Zoom {
                press: Point::new(3, 3),
                release: Point::new(3, 40),
            })
            .unwrap());

        assert!(engine.handle(EngineRequest::Reset).unwrap());
    }

    #[test]
    fn test_serial_and_rayon_rasters_match() {
        let config = EngineConfig {
            pixel_size: size(90, 60),
            max_iterations: 60,
            colour_map_kind: MandelbrotColourMapKinds::FireGradient,
            render_strategy: RenderStrategy::Serial,
        };

        let serial = FractalEngine::new(config).unwrap();
        let rayon = FractalEngine::new(EngineConfig {
            render_strategy: RenderStrategy::Rayon,
            ..config
        })
        .unwrap();

        assert_eq!(serial.raster(), rayon.raster());
    }

    #[test_log::test]
    fn test_full_view_then_zoom_onto_top_left_quadrant() {
        let mut engine = FractalEngine::new(EngineConfig {
            pixel_size: size(1000, 765),
            max_iterations: 100,
            ..EngineConfig::default()
        })
        .unwrap();

        let viewport = engine.viewport();
        assert!((viewport.top_left().real + 2.5).abs() < 1e-9);
        assert!((viewport.bottom_right().real - 1.0).abs() < 1e-9);
        assert!(viewport.top_left().imag <= -1.25);
        assert!(viewport.bottom_right().imag >= 1.25);

        let scale = viewport.scale();
        assert!(engine
            .on_zoom_request(Point::new(0, 0), Point::new(500, 382))
            .unwrap());

        let zoomed = engine.viewport();
        assert!((zoomed.scale() / scale - 0.5).abs() < 1e-3);
        assert!((zoomed.top_left().real - viewport.top_left().real).abs() < scale);
    }
}
