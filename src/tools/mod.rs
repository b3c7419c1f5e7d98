use std::str::FromStr;

use egui::Pos2;

use crate::element::{Primitive, ShapeKind};
use crate::error::UnknownTool;

mod draw_stroke_tool;
mod shape_tool;
mod state_machine;

pub use state_machine::{Drag, DragState, ToolStateMachine};

/// Tools that stay selected and react to pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Pencil,
    Crayon,
    Eraser,
    Line,
    Rect,
    Oval,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Pencil,
        Tool::Crayon,
        Tool::Eraser,
        Tool::Line,
        Tool::Rect,
        Tool::Oval,
        Tool::Text,
    ];

    /// Return the name of the tool
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Crayon => "crayon",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Rect => "rect",
            Tool::Oval => "oval",
            Tool::Text => "text",
        }
    }

    /// Freehand tools commit while the pointer moves
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Crayon | Tool::Eraser)
    }

    /// The shape a shape tool commits on release
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rect => Some(ShapeKind::Rect),
            Tool::Oval => Some(ShapeKind::Oval),
            _ => None,
        }
    }
}

/// Toolbar entries that run immediately instead of becoming the active tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAction {
    Color,
    Clear,
    Save,
    Undo,
    Redo,
}

impl MetaAction {
    pub fn name(self) -> &'static str {
        match self {
            MetaAction::Color => "color",
            MetaAction::Clear => "clear",
            MetaAction::Save => "save",
            MetaAction::Undo => "undo",
            MetaAction::Redo => "redo",
        }
    }
}

/// Anything the toolbar can hand to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolSelection {
    Tool(Tool),
    Action(MetaAction),
}

impl ToolSelection {
    /// Toolbar order
    pub const TOOLBAR: [ToolSelection; 12] = [
        ToolSelection::Action(MetaAction::Color),
        ToolSelection::Tool(Tool::Pencil),
        ToolSelection::Tool(Tool::Crayon),
        ToolSelection::Tool(Tool::Eraser),
        ToolSelection::Tool(Tool::Line),
        ToolSelection::Tool(Tool::Rect),
        ToolSelection::Tool(Tool::Oval),
        ToolSelection::Tool(Tool::Text),
        ToolSelection::Action(MetaAction::Clear),
        ToolSelection::Action(MetaAction::Save),
        ToolSelection::Action(MetaAction::Undo),
        ToolSelection::Action(MetaAction::Redo),
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolSelection::Tool(tool) => tool.name(),
            ToolSelection::Action(action) => action.name(),
        }
    }
}

impl FromStr for ToolSelection {
    type Err = UnknownTool;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::TOOLBAR
            .into_iter()
            .find(|selection| selection.name() == name)
            .ok_or_else(|| UnknownTool(name.to_owned()))
    }
}

/// What a pointer event produced
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolOutput {
    #[default]
    Nothing,
    /// Primitives to commit, each one a separate history entry
    Commit(Vec<Primitive>),
    /// The text tool was released here and needs a string from the user
    RequestText(Pos2),
}
