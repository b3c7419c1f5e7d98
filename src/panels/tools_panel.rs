use egui::{Button, Slider};

use crate::state::{BRUSH_SIZE_RANGE, EditorContext, Request};
use crate::tools::{MetaAction, ToolSelection};

/// The toolbar: one entry per tool or action, then the thickness slider
pub fn tools_panel(
    editor: &mut EditorContext,
    ctx: &egui::Context,
    enabled: bool,
) -> Option<Request> {
    let mut request = None;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                for selection in ToolSelection::TOOLBAR {
                    let label = capitalize(selection.name());
                    let clicked = match selection {
                        ToolSelection::Tool(tool) => {
                            ui.selectable_label(editor.brush().tool == tool, label).clicked()
                        }
                        ToolSelection::Action(MetaAction::Undo) => {
                            let can_undo = editor.history().can_undo();
                            ui.add_enabled(can_undo, Button::new(label)).clicked()
                        }
                        ToolSelection::Action(MetaAction::Redo) => {
                            let can_redo = editor.history().can_redo();
                            ui.add_enabled(can_redo, Button::new(label)).clicked()
                        }
                        ToolSelection::Action(MetaAction::Color) => {
                            let fill = editor.brush().color.gamma_multiply(0.35);
                            ui.add(Button::new(label).fill(fill)).clicked()
                        }
                        ToolSelection::Action(_) => ui.button(label).clicked(),
                    };
                    if clicked {
                        request = editor.select_tool(selection).or(request);
                    }
                }

                ui.separator();
                let mut size = editor.brush().size();
                ui.label("Thickness:");
                if ui.add(Slider::new(&mut size, BRUSH_SIZE_RANGE)).changed() {
                    editor.set_brush_size(size);
                }
            });
        });
    });

    request
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(capitalize("oval"), "Oval");
        assert_eq!(capitalize(""), "");
    }
}
