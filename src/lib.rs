#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use config::CanvasConfig;
pub use document::Document;
pub use element::{LineStyle, Primitive, PrimitiveId, ShapeKind};
pub use error::{ConfigError, ExportError, UnknownTool};
pub use history::History;
pub use renderer::Renderer;
pub use state::{BrushState, EditorContext, Request};
pub use tools::{Tool, ToolSelection, ToolStateMachine};
