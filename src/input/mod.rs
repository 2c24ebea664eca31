//! Input adapters for the viewer.
//!
//! These translate raw host input into [`EngineRequest`](crate::EngineRequest)s.

#[cfg(feature = "gui")]
pub mod gui;
pub mod selection;
