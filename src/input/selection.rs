use crate::controllers::engine::EngineRequest;
use crate::core::data::point::Point;

/// Tracks a mouse-drag selection and turns its release into a zoom request.
///
/// Button events carry no position, so the tracker remembers the last cursor
/// position reported by the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTracker {
    press: Option<Point>,
    cursor: Point,
}

impl SelectionTracker {
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = position;
    }

    pub fn press(&mut self) {
        self.press = Some(self.cursor);
    }

    /// Ends the drag. Returns `None` if no press was seen first.
    pub fn release(&mut self) -> Option<EngineRequest> {
        self.press.take().map(|press| EngineRequest::Zoom {
            press,
            release: self.cursor,
        })
    }

    /// Press point and current cursor while a drag is in progress.
    #[must_use]
    pub fn rectangle(&self) -> Option<(Point, Point)> {
        self.press.map(|press| (press, self.cursor))
    }

    pub fn cancel(&mut self) {
        self.press = None;
    }
}
