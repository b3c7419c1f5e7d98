use egui::{Color32, Painter, Rect, Stroke};

use crate::state::EditorContext;

/// Paints the canvas: background, committed primitives, then the live preview
#[derive(Debug)]
pub struct Renderer {
    border: Stroke,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            border: Stroke::new(1.0, Color32::GRAY),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame into `rect`, the canvas's screen rectangle
    pub fn render(&self, painter: &Painter, rect: Rect, editor: &EditorContext) {
        let origin = rect.min.to_vec2();

        painter.rect_filled(rect, 0.0, editor.config().background);
        editor.document().render(painter, origin);
        if let Some(preview) = editor.preview() {
            preview.draw(painter, origin);
        }
        painter.rect_stroke(rect, 0.0, self.border);
    }
}
