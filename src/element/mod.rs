use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

mod common;

pub use common::MIN_LINE_WIDTH;
pub(crate) use common::distance_to_line_segment;

/// Stable identity of a committed primitive.
///
/// Ids are handed out by the [`Document`](crate::Document) in increasing order and are
/// never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(pub(crate) usize);

impl std::fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a freehand segment is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    /// Half-coverage stipple used by the crayon
    Sketchy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Oval,
}

/// One committed, immutable mark on the canvas.
///
/// All coordinates are canvas-local.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A single straight piece of a freehand stroke
    FreehandSegment {
        points: [Pos2; 2],
        color: Color32,
        width: f32,
        style: LineStyle,
    },
    Shape {
        kind: ShapeKind,
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
        filled: bool,
    },
    Text {
        position: Pos2,
        content: String,
        color: Color32,
        size: f32,
    },
}

impl Primitive {
    pub fn color(&self) -> Color32 {
        match self {
            Primitive::FreehandSegment { color, .. }
            | Primitive::Shape { color, .. }
            | Primitive::Text { color, .. } => *color,
        }
    }

    /// Draw the primitive using the provided painter, offset by the canvas origin
    pub fn draw(&self, painter: &Painter, origin: Vec2) {
        match self {
            Primitive::FreehandSegment { points, color, width, style } => {
                let color = match style {
                    LineStyle::Solid => *color,
                    LineStyle::Sketchy => color.gamma_multiply(0.5),
                };
                let [a, b] = [points[0] + origin, points[1] + origin];
                painter.line_segment([a, b], Stroke::new(*width, color));
                // Round caps
                painter.circle_filled(a, width / 2.0, color);
                painter.circle_filled(b, width / 2.0, color);
            }
            Primitive::Shape { kind, from, to, color, width, filled } => {
                let (from, to) = (*from + origin, *to + origin);
                let stroke = Stroke::new(*width, *color);
                match (kind, filled) {
                    (ShapeKind::Line, _) => {
                        painter.line_segment([from, to], stroke);
                    }
                    (ShapeKind::Rect, false) => {
                        painter.rect_stroke(Rect::from_two_pos(from, to), 0.0, stroke);
                    }
                    (ShapeKind::Rect, true) => {
                        painter.rect_filled(Rect::from_two_pos(from, to), 0.0, *color);
                    }
                    (ShapeKind::Oval, false) => {
                        let rect = Rect::from_two_pos(from, to);
                        let radius = rect.size() / 2.0;
                        painter.add(Shape::ellipse_stroke(rect.center(), radius, stroke));
                    }
                    (ShapeKind::Oval, true) => {
                        let rect = Rect::from_two_pos(from, to);
                        let radius = rect.size() / 2.0;
                        painter.add(Shape::ellipse_filled(rect.center(), radius, *color));
                    }
                }
            }
            Primitive::Text { position, content, color, size } => {
                painter.text(
                    *position + origin,
                    Align2::LEFT_TOP,
                    content,
                    FontId::proportional(*size),
                    *color,
                );
            }
        }
    }
}

/// Factory functions for creating primitives
pub mod factory {
    use super::*;

    /// Create a freehand segment; widths below one pixel are raised to one
    pub fn segment(
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
        style: LineStyle,
    ) -> Primitive {
        Primitive::FreehandSegment {
            points: [from, to],
            color,
            width: width.max(MIN_LINE_WIDTH),
            style,
        }
    }

    /// Create an outlined shape
    pub fn outline(kind: ShapeKind, from: Pos2, to: Pos2, color: Color32, width: f32) -> Primitive {
        Primitive::Shape {
            kind,
            from,
            to,
            color,
            width: width.max(MIN_LINE_WIDTH),
            filled: false,
        }
    }

    /// Create a solid rectangle
    pub fn filled_rect(from: Pos2, to: Pos2, color: Color32, width: f32) -> Primitive {
        Primitive::Shape {
            kind: ShapeKind::Rect,
            from,
            to,
            color,
            width: width.max(MIN_LINE_WIDTH),
            filled: true,
        }
    }

    pub fn text(
        position: Pos2,
        content: impl Into<String>,
        color: Color32,
        size: f32,
    ) -> Primitive {
        Primitive::Text {
            position,
            content: content.into(),
            color,
            size,
        }
    }
}
