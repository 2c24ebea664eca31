use crate::adapters::pixel_format::FrameSizeMismatch;
use crate::controllers::engine::RenderError;
use std::error::Error;
use std::fmt;
use winit::error::{EventLoopError, OsError};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
    Texture(pixels::TextureError),
    Frame(FrameSizeMismatch),
    Render(RenderError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "window creation failed: {}", err),
            Self::Pixels(err) => write!(f, "pixels error: {}", err),
            Self::Texture(err) => write!(f, "pixels texture error: {}", err),
            Self::Frame(err) => write!(f, "frame error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::Frame(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<FrameSizeMismatch> for GuiError {
    fn from(err: FrameSizeMismatch) -> Self {
        Self::Frame(err)
    }
}

impl From<RenderError> for GuiError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
