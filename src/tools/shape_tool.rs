use egui::Pos2;

use crate::element::{Primitive, ShapeKind, factory};
use crate::state::BrushState;

/// Outlined shape from the anchor to the pointer, shown while dragging
pub(super) fn preview(kind: ShapeKind, anchor: Pos2, pos: Pos2, brush: &BrushState) -> Primitive {
    factory::outline(kind, anchor, pos, brush.color, brush.width())
}

/// The primitive a shape drag commits on release.
///
/// A drag held longer than `long_press_secs` always becomes a filled rectangle over the
/// same bounds, whatever shape tool was active.
pub(super) fn finalize(
    kind: ShapeKind,
    anchor: Pos2,
    pos: Pos2,
    held_secs: f64,
    long_press_secs: f64,
    brush: &BrushState,
) -> Primitive {
    if held_secs > long_press_secs {
        factory::filled_rect(anchor, pos, brush.color, brush.width())
    } else {
        factory::outline(kind, anchor, pos, brush.color, brush.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Tool;
    use egui::Color32;

    #[test]
    fn threshold_is_exclusive() {
        let brush = BrushState::new(Color32::BLUE, 2, Tool::Line);
        let (a, b) = (Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));

        let at_threshold = finalize(ShapeKind::Line, a, b, 1.0, 1.0, &brush);
        assert!(matches!(
            at_threshold,
            Primitive::Shape { kind: ShapeKind::Line, filled: false, .. }
        ));

        let past_threshold = finalize(ShapeKind::Line, a, b, 1.01, 1.0, &brush);
        assert!(matches!(
            past_threshold,
            Primitive::Shape { kind: ShapeKind::Rect, filled: true, .. }
        ));
    }
}
