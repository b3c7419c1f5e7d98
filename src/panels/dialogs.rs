use std::path::PathBuf;

use egui::color_picker::{Alpha, color_picker_color32};
use egui::{Align2, Color32, Key};

use crate::file_handler::parse_save_path;
use crate::state::{EditorContext, Request};

/// The single modal dialog that may be open over the canvas
#[derive(Debug, Default)]
pub enum Dialog {
    #[default]
    Closed,
    ColorPicker { color: Color32 },
    TextPrompt { buffer: String },
    SavePath { buffer: String },
}

/// What the user answered when a dialog closed. `None` payloads mean cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Color(Option<Color32>),
    Text(Option<String>),
    Save(Option<PathBuf>),
}

impl Dialog {
    pub fn for_request(request: Request, editor: &EditorContext) -> Self {
        match request {
            Request::PickColor => Dialog::ColorPicker { color: editor.brush().color },
            Request::Text(_) => Dialog::TextPrompt { buffer: String::new() },
            Request::SaveCanvas => Dialog::SavePath {
                buffer: editor.config().default_save_path.clone(),
            },
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    /// Show the open dialog, if any. Returns the outcome on the frame it closes.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        let outcome = match self {
            Dialog::Closed => return None,
            Dialog::ColorPicker { color } => modal(ctx, "Pick a color", |ui| {
                color_picker_color32(ui, color, Alpha::Opaque);
                buttons(ui, "OK").map(|ok| DialogOutcome::Color(ok.then_some(*color)))
            }),
            Dialog::TextPrompt { buffer } => modal(ctx, "Input Text", |ui| {
                ui.label("Enter text:");
                let response = ui.text_edit_singleline(buffer);
                if !response.has_focus() && !response.lost_focus() {
                    response.request_focus();
                }
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                let answer = if submitted { Some(true) } else { buttons(ui, "OK") };
                answer.map(|ok| DialogOutcome::Text(ok.then(|| buffer.clone())))
            }),
            Dialog::SavePath { buffer } => modal(ctx, "Save as PNG", |ui| {
                ui.label("File name:");
                ui.text_edit_singleline(buffer);
                buttons(ui, "Save")
                    .map(|ok| DialogOutcome::Save(ok.then(|| parse_save_path(buffer)).flatten()))
            }),
        };

        if outcome.is_some() {
            *self = Dialog::Closed;
        }
        outcome
    }
}

fn modal<R>(
    ctx: &egui::Context,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> Option<R>,
) -> Option<R> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, add_contents)
        .and_then(|response| response.inner)
        .flatten()
}

/// `Some(true)` on confirm, `Some(false)` on cancel or Escape
fn buttons(ui: &mut egui::Ui, confirm: &str) -> Option<bool> {
    let mut answer = None;
    ui.horizontal(|ui| {
        if ui.button(confirm).clicked() {
            answer = Some(true);
        }
        if ui.button("Cancel").clicked() {
            answer = Some(false);
        }
    });
    if answer.is_none() && ui.input(|i| i.key_pressed(Key::Escape)) {
        answer = Some(false);
    }
    answer
}
