//! Pixel-to-plane mapping and the zoom, reset and resize rules that move it.

mod viewport;

pub use viewport::{MIN_HEIGHT, MIN_WIDTH, Viewport, ViewportError};
