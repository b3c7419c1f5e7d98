use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::CanvasConfig;
use crate::input::InputHandler;
use crate::panels::{self, Dialog, DialogOutcome};
use crate::renderer::Renderer;
use crate::state::EditorContext;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The eframe shell around an [`EditorContext`].
///
/// Every session starts with an empty canvas; nothing is persisted.
pub struct PaintApp {
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
    dialog: Dialog,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        Self::from_editor(EditorContext::new(config))
    }

    pub fn from_editor(editor: EditorContext) -> Self {
        Self {
            editor,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            dialog: Dialog::Closed,
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Check the shifted chord first; consume_shortcut ignores extra modifiers
        let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        if ctx.input_mut(|i| i.consume_shortcut(&redo_shift) || i.consume_shortcut(&REDO)) {
            self.editor.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO)) {
            self.editor.undo();
        }
    }

    fn resolve(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::Color(color) => self.editor.apply_color(color),
            DialogOutcome::Text(text) => {
                self.editor.submit_text(text);
            }
            DialogOutcome::Save(path) => {
                if let Err(err) = self.editor.save_to(path.as_deref()) {
                    log::error!("{err}");
                }
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let enabled = !self.dialog.is_open();
        if enabled {
            self.handle_shortcuts(ctx);
        }

        let toolbar_request = panels::tools_panel(&mut self.editor, ctx, enabled);
        let canvas_request =
            panels::central_panel(&mut self.editor, &mut self.input, &self.renderer, ctx, enabled);

        if let Some(request) = toolbar_request.or(canvas_request) {
            self.dialog = Dialog::for_request(request, &self.editor);
        }

        if let Some(outcome) = self.dialog.show(ctx) {
            self.resolve(outcome);
        }
    }
}
