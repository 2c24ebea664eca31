use crate::controllers::engine::EngineRequest;
use crate::core::fractals::mandelbrot::precision::PrecisionChange;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Maps a key event to an engine request.
///
/// Precision steps fire on press (and auto-repeat); reset fires on release.
pub fn key_request(key_code: KeyCode, state: ElementState) -> Option<EngineRequest> {
    match (key_code, state) {
        (KeyCode::ArrowUp, ElementState::Pressed) => {
            Some(EngineRequest::Precision(PrecisionChange::Increase))
        }
        (KeyCode::ArrowDown, ElementState::Pressed) => {
            Some(EngineRequest::Precision(PrecisionChange::Decrease))
        }
        (KeyCode::Enter | KeyCode::NumpadEnter, ElementState::Released) => {
            Some(EngineRequest::Reset)
        }
        _ => None,
    }
}
