//! The fractal engine: owns the viewport, the iteration depth and the raster.
//!
//! Hosts decode their input into [`EngineRequest`]s and hand them to
//! [`FractalEngine`], which recomputes the whole raster synchronously before
//! returning. Hosts only ever read the result back through
//! [`FractalEngine::raster`] and [`FractalEngine::precision`].

pub mod config;
pub mod errors;
mod fractal_engine;
pub mod request;

pub use config::{EngineConfig, RenderStrategy};
pub use errors::RenderError;
pub use fractal_engine::FractalEngine;
pub use request::EngineRequest;
