use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas-local coordinates, as the editor consumes them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed inside the canvas; `time` is in seconds
    PointerDown { pos: Pos2, time: f64 },
    /// Pointer moved while the press that started inside the canvas is held
    PointerMove { pos: Pos2 },
    /// Primary button released after a press inside the canvas
    PointerUp { pos: Pos2, time: f64 },
}

/// Converts raw egui pointer input into [`CanvasEvent`]s.
///
/// Only presses that start inside the canvas are tracked. Once tracked, moves and the
/// release are reported wherever the pointer is, so a drag may leave the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed_in_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any tracked press, e.g. when a modal dialog takes over
    pub fn reset(&mut self) {
        self.last_pointer_pos = None;
        self.pressed_in_canvas = false;
    }

    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        ctx.input(|input| {
            let time = input.time;
            let pointer_pos = input.pointer.interact_pos();

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pointer_pos.filter(|pos| canvas_rect.contains(*pos)) {
                    events.push(CanvasEvent::PointerDown { pos: to_local(pos), time });
                    self.pressed_in_canvas = true;
                    self.last_pointer_pos = Some(pos);
                }
            }

            if !self.pressed_in_canvas {
                return;
            }

            if input.pointer.button_down(PointerButton::Primary) {
                if let Some(pos) = pointer_pos.filter(|pos| Some(*pos) != self.last_pointer_pos) {
                    events.push(CanvasEvent::PointerMove { pos: to_local(pos) });
                    self.last_pointer_pos = Some(pos);
                }
            }

            if input.pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = pointer_pos.or(self.last_pointer_pos) {
                    events.push(CanvasEvent::PointerUp { pos: to_local(pos), time });
                }
                self.reset();
            }
        });

        events
    }
}
