use egui::{Sense, vec2};

use crate::input::{CanvasEvent, InputHandler};
use crate::renderer::Renderer;
use crate::state::{EditorContext, Request};

/// The drawing canvas at its native size. Pointer input is only routed to the editor
/// while `enabled`.
pub fn central_panel(
    editor: &mut EditorContext,
    input: &mut InputHandler,
    renderer: &Renderer,
    ctx: &egui::Context,
    enabled: bool,
) -> Option<Request> {
    let mut request = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        let size = vec2(editor.config().width() as f32, editor.config().height() as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let canvas_rect = response.rect;

        if enabled {
            for event in input.process_input(ctx, canvas_rect) {
                match event {
                    CanvasEvent::PointerDown { pos, time } => editor.pointer_down(pos, time),
                    CanvasEvent::PointerMove { pos } => {
                        editor.pointer_move(pos);
                    }
                    CanvasEvent::PointerUp { pos, time } => {
                        request = editor.pointer_up(pos, time).or(request);
                    }
                }
            }
        } else {
            input.reset();
        }

        renderer.render(&painter, canvas_rect, editor);
    });

    request
}
