pub mod context;

pub use context::{EditorContext, Request};

use egui::Color32;

use crate::tools::Tool;

/// Smallest and largest brush size the thickness slider offers
pub const BRUSH_SIZE_RANGE: std::ops::RangeInclusive<u8> = 1..=20;

/// Brush settings read by every draw operation.
///
/// Only explicit tool-select, slider and color-pick actions change it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    pub color: Color32,
    size: u8,
    pub tool: Tool,
}

impl BrushState {
    /// `size` is clamped into [`BRUSH_SIZE_RANGE`]
    pub fn new(color: Color32, size: u8, tool: Tool) -> Self {
        Self {
            color,
            size: clamp_size(size),
            tool,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn set_size(&mut self, size: u8) {
        self.size = clamp_size(size);
    }

    /// Line width in canvas pixels
    pub fn width(&self) -> f32 {
        f32::from(self.size)
    }
}

fn clamp_size(size: u8) -> u8 {
    size.clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end())
}
