//! Windowed host: winit events in, engine requests out, raster and overlay
//! painted with pixels and egui.

mod app;
mod errors;
mod key_input;
mod overlay;

pub use app::run_gui;
pub use errors::GuiError;
