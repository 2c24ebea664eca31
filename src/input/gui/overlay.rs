use crate::core::data::point::Point;
use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order, Pos2, Rect, Stroke};

const PRECISION_TEXT_POSITION: Pos2 = Pos2::new(10.0, 10.0);
const PRECISION_FONT_SIZE: f32 = 20.0;
const WAIT_FONT_SIZE: f32 = 30.0;
const WAIT_MESSAGE: &str = "Please Wait!";
const SELECTION_STROKE_WIDTH: f32 = 2.0;

/// What to paint over the fractal for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    pub precision: u32,
    pub selection: Option<(Point, Point)>,
    pub waiting: bool,
}

pub fn draw_overlay(ctx: &Context, state: &OverlayState) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("fractal_overlay")));
    let pixels_per_point = ctx.pixels_per_point();

    if let Some((press, cursor)) = state.selection {
        let rect = Rect::from_two_pos(
            to_screen(press, pixels_per_point),
            to_screen(cursor, pixels_per_point),
        );
        painter.rect_stroke(rect, 0.0, Stroke::new(SELECTION_STROKE_WIDTH, Color32::WHITE));
    }

    painter.text(
        PRECISION_TEXT_POSITION,
        Align2::LEFT_TOP,
        state.precision,
        FontId::proportional(PRECISION_FONT_SIZE),
        Color32::WHITE,
    );

    if state.waiting {
        let screen = ctx.screen_rect();
        painter.rect_filled(screen, 0.0, Color32::from_rgba_unmultiplied(10, 10, 10, 220));
        painter.text(
            screen.center(),
            Align2::CENTER_CENTER,
            WAIT_MESSAGE,
            FontId::proportional(WAIT_FONT_SIZE),
            Color32::WHITE,
        );
    }
}

/// Raster pixels map one-to-one onto physical window pixels.
fn to_screen(point: Point, pixels_per_point: f32) -> Pos2 {
    Pos2::new(
        point.x as f32 / pixels_per_point,
        point.y as f32 / pixels_per_point,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_screen_divides_by_scale_factor() {
        assert_eq!(to_screen(Point::new(200, 100), 2.0), Pos2::new(100.0, 50.0));
        assert_eq!(to_screen(Point::new(-4, 6), 1.0), Pos2::new(-4.0, 6.0));
    }

    #[test]
    fn draw_overlay_paints_inside_a_frame() {
        let ctx = Context::default();
        let state = OverlayState {
            precision: 100,
            selection: Some((Point::new(10, 10), Point::new(50, 40))),
            waiting: true,
        };

        let output = ctx.run(egui::RawInput::default(), |ctx| draw_overlay(ctx, &state));

        assert!(!output.shapes.is_empty());
    }
}
