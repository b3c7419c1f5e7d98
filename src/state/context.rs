//! The coordinating owner of all drawing state.
//!
//! `EditorContext` holds the brush, the tool state machine, the drawing surface and the
//! history, and is the only place any of them is mutated. The UI shell feeds it toolbar
//! selections and canvas-local pointer events; whenever an action needs something only
//! the user can provide (a color, a file path, a string) it hands back a [`Request`] and
//! waits for the matching `apply_*` / `submit_*` / `save_to` call.
//!
//! # Example
//!
//! ```rust
//! use eframe_canvas::{CanvasConfig, EditorContext};
//! use eframe_canvas::tools::{Tool, ToolSelection};
//! use egui::Pos2;
//!
//! let mut editor = EditorContext::new(CanvasConfig::default());
//! editor.select_tool(ToolSelection::Tool(Tool::Rect));
//! editor.pointer_down(Pos2::new(10.0, 10.0), 0.0);
//! editor.pointer_move(Pos2::new(50.0, 40.0));
//! editor.pointer_up(Pos2::new(50.0, 40.0), 0.3);
//!
//! assert_eq!(editor.document().visible().count(), 1);
//! assert!(editor.undo().is_some());
//! assert_eq!(editor.document().visible().count(), 0);
//! ```
use std::path::{Path, PathBuf};

use egui::{Color32, Pos2};
use image::RgbaImage;

use super::BrushState;
use crate::config::CanvasConfig;
use crate::document::Document;
use crate::element::{Primitive, PrimitiveId, factory};
use crate::error::{ExportError, UnknownTool};
use crate::file_handler;
use crate::history::History;
use crate::tools::{MetaAction, Tool, ToolOutput, ToolSelection, ToolStateMachine};

/// Input the editor needs from an outside collaborator before it can continue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    /// Answer with [`EditorContext::apply_color`]
    PickColor,
    /// Answer with [`EditorContext::save_to`]
    SaveCanvas,
    /// Answer with [`EditorContext::submit_text`]
    Text(Pos2),
}

#[derive(Debug)]
pub struct EditorContext {
    config: CanvasConfig,
    brush: BrushState,
    tools: ToolStateMachine,
    document: Document,
    history: History,
    /// Release point of the text tool while its prompt is open
    pending_text: Option<Pos2>,
}

impl EditorContext {
    pub fn new(config: CanvasConfig) -> Self {
        let tools = ToolStateMachine::new(&config);
        Self::with_tools(config, tools)
    }

    /// An editor whose crayon texture is reproducible
    pub fn with_seed(config: CanvasConfig, seed: u64) -> Self {
        let tools = ToolStateMachine::with_seed(&config, seed);
        Self::with_tools(config, tools)
    }

    fn with_tools(config: CanvasConfig, tools: ToolStateMachine) -> Self {
        let brush = BrushState::new(config.brush_color, config.brush_size, Tool::Pencil);
        Self {
            config,
            brush,
            tools,
            document: Document::new(),
            history: History::new(),
            pending_text: None,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The transient shape of the drag in progress
    pub fn preview(&self) -> Option<&Primitive> {
        self.tools.preview()
    }

    pub fn pending_text(&self) -> Option<Pos2> {
        self.pending_text
    }

    /// Persistent tools become active; meta-actions run now and leave the active tool
    /// alone. Color and save need a collaborator and come back as a [`Request`].
    pub fn select_tool(&mut self, selection: ToolSelection) -> Option<Request> {
        log::info!("Tool selected: {}", selection.name());
        match selection {
            ToolSelection::Tool(tool) => {
                self.tools.cancel();
                self.brush.tool = tool;
                None
            }
            ToolSelection::Action(MetaAction::Color) => Some(Request::PickColor),
            ToolSelection::Action(MetaAction::Save) => Some(Request::SaveCanvas),
            ToolSelection::Action(MetaAction::Clear) => {
                self.clear();
                None
            }
            ToolSelection::Action(MetaAction::Undo) => {
                self.undo();
                None
            }
            ToolSelection::Action(MetaAction::Redo) => {
                self.redo();
                None
            }
        }
    }

    pub fn select_tool_by_name(&mut self, name: &str) -> Result<Option<Request>, UnknownTool> {
        let selection = name.parse::<ToolSelection>()?;
        Ok(self.select_tool(selection))
    }

    /// `None` means the picker was cancelled and the brush keeps its color
    pub fn apply_color(&mut self, color: Option<Color32>) {
        if let Some(color) = color {
            self.brush.color = color;
        }
    }

    pub fn set_brush_size(&mut self, size: u8) {
        self.brush.set_size(size);
    }

    pub fn pointer_down(&mut self, pos: Pos2, time: f64) {
        self.pending_text = None;
        self.tools.pointer_down(pos, time, &self.brush);
    }

    /// Returns the ids committed by this move, in commit order
    pub fn pointer_move(&mut self, pos: Pos2) -> Vec<PrimitiveId> {
        let output = self.tools.pointer_move(pos, &self.brush);
        self.apply(output).0
    }

    /// Finishes the drag. The text tool answers with [`Request::Text`].
    pub fn pointer_up(&mut self, pos: Pos2, time: f64) -> Option<Request> {
        let output = self.tools.pointer_up(pos, time, &self.brush);
        self.apply(output).1
    }

    /// Commit the text typed for the pending text request. Empty or cancelled input
    /// commits nothing.
    pub fn submit_text(&mut self, text: Option<String>) -> Option<PrimitiveId> {
        let position = self.pending_text.take()?;
        let content = text.filter(|text| !text.is_empty())?;
        let primitive = factory::text(position, content, self.brush.color, self.config.text_size);
        Some(self.commit(primitive))
    }

    pub fn undo(&mut self) -> Option<PrimitiveId> {
        self.history.undo(&mut self.document)
    }

    pub fn redo(&mut self) -> Option<PrimitiveId> {
        self.history.redo(&mut self.document)
    }

    pub fn clear(&mut self) {
        self.tools.cancel();
        self.pending_text = None;
        self.history.clear(&mut self.document);
        log::info!("Canvas cleared");
    }

    /// The visible drawing flattened at the canvas's native size
    pub fn export(&self) -> RgbaImage {
        self.document
            .export(self.config.width(), self.config.height(), self.config.background)
    }

    /// Write the canvas as PNG. No path means the save dialog was cancelled, which
    /// aborts silently.
    pub fn save_to(&self, path: Option<&Path>) -> Result<Option<PathBuf>, ExportError> {
        let Some(path) = path else {
            return Ok(None);
        };
        file_handler::save_png(&self.export(), path).map(Some)
    }

    fn commit(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = self.history.commit(&mut self.document, primitive);
        log::debug!("Committed {id}");
        id
    }

    fn apply(&mut self, output: ToolOutput) -> (Vec<PrimitiveId>, Option<Request>) {
        match output {
            ToolOutput::Nothing => (Vec::new(), None),
            ToolOutput::Commit(primitives) => {
                let ids = primitives.into_iter().map(|primitive| self.commit(primitive)).collect();
                (ids, None)
            }
            ToolOutput::RequestText(pos) => {
                self.pending_text = Some(pos);
                (Vec::new(), Some(Request::Text(pos)))
            }
        }
    }
}
