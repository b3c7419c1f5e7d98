use egui::{Color32, Pos2};
use rand::{SeedableRng, rngs::StdRng};

use super::{Tool, ToolOutput, draw_stroke_tool, shape_tool};
use crate::config::CanvasConfig;
use crate::element::Primitive;
use crate::state::BrushState;

/// An in-progress pointer drag
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    /// Tool that was active on pointer-down
    pub tool: Tool,
    pub anchor: Pos2,
    /// Where the last freehand segment ended
    pub last: Pos2,
    /// Pointer-down timestamp, in seconds
    pub start_time: f64,
    /// Transient shape for shape tools; never part of history
    pub preview: Option<Primitive>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Drag),
}

/// Turns pointer events into primitives.
///
/// ```text
///   Idle ──pointer_down──► Dragging ──pointer_up──► Idle
///                            │  ▲
///                            └──┘ pointer_move
/// ```
///
/// Freehand tools commit on every move. Shape tools only keep a preview while dragging
/// and commit once on release. The text tool asks for a string on release.
/// Move and up events arriving while idle are ignored.
#[derive(Debug)]
pub struct ToolStateMachine {
    state: DragState,
    rng: StdRng,
    eraser_color: Color32,
    long_press_secs: f64,
    crayon_jitter: u8,
}

impl ToolStateMachine {
    pub fn new(config: &CanvasConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic crayon texture
    pub fn with_seed(config: &CanvasConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &CanvasConfig, rng: StdRng) -> Self {
        Self {
            state: DragState::Idle,
            rng,
            eraser_color: config.background,
            long_press_secs: config.long_press_secs,
            crayon_jitter: config.crayon_jitter,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn current_state_name(&self) -> &'static str {
        match self.state {
            DragState::Idle => "Idle",
            DragState::Dragging(_) => "Dragging",
        }
    }

    /// The shape currently being dragged out, if any
    pub fn preview(&self) -> Option<&Primitive> {
        match &self.state {
            DragState::Dragging(drag) => drag.preview.as_ref(),
            DragState::Idle => None,
        }
    }

    /// Abandon any drag; its preview is discarded
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            log::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Start a drag. A drag already in progress is superseded.
    pub fn pointer_down(&mut self, pos: Pos2, time: f64, brush: &BrushState) {
        self.state = DragState::Dragging(Drag {
            tool: brush.tool,
            anchor: pos,
            last: pos,
            start_time: time,
            preview: None,
        });
    }

    pub fn pointer_move(&mut self, pos: Pos2, brush: &BrushState) -> ToolOutput {
        let DragState::Dragging(drag) = &mut self.state else {
            return ToolOutput::Nothing;
        };

        match drag.tool {
            Tool::Pencil => {
                let segment = draw_stroke_tool::pencil_segment(drag.last, pos, brush);
                drag.last = pos;
                ToolOutput::Commit(vec![segment])
            }
            Tool::Eraser => {
                let segment =
                    draw_stroke_tool::eraser_segment(drag.last, pos, brush, self.eraser_color);
                drag.last = pos;
                ToolOutput::Commit(vec![segment])
            }
            Tool::Crayon => {
                let jitter = self.crayon_jitter;
                let segments =
                    draw_stroke_tool::crayon_segments(drag.last, pos, brush, jitter, &mut self.rng);
                drag.last = pos;
                ToolOutput::Commit(segments)
            }
            Tool::Line | Tool::Rect | Tool::Oval => {
                if let Some(kind) = drag.tool.shape_kind() {
                    drag.preview = Some(shape_tool::preview(kind, drag.anchor, pos, brush));
                }
                ToolOutput::Nothing
            }
            Tool::Text => ToolOutput::Nothing,
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2, time: f64, brush: &BrushState) -> ToolOutput {
        let DragState::Dragging(drag) = std::mem::take(&mut self.state) else {
            return ToolOutput::Nothing;
        };

        match drag.tool {
            Tool::Line | Tool::Rect | Tool::Oval => {
                // Bounds come from the release point, so missed move events lose nothing.
                // A click that never left the anchor commits nothing.
                match drag.tool.shape_kind() {
                    Some(kind) if pos != drag.anchor => {
                        let held = time - drag.start_time;
                        let long_press = self.long_press_secs;
                        let shape =
                            shape_tool::finalize(kind, drag.anchor, pos, held, long_press, brush);
                        ToolOutput::Commit(vec![shape])
                    }
                    _ => ToolOutput::Nothing,
                }
            }
            Tool::Text => ToolOutput::RequestText(pos),
            Tool::Pencil | Tool::Crayon | Tool::Eraser => ToolOutput::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{LineStyle, ShapeKind};

    fn machine() -> ToolStateMachine {
        ToolStateMachine::with_seed(&CanvasConfig::default(), 42)
    }

    fn brush(tool: Tool) -> BrushState {
        BrushState::new(Color32::BLACK, 3, tool)
    }

    #[test]
    fn idle_events_are_ignored() {
        let mut tools = machine();
        let brush = brush(Tool::Pencil);

        assert_eq!(tools.pointer_move(Pos2::new(1.0, 1.0), &brush), ToolOutput::Nothing);
        assert_eq!(tools.pointer_up(Pos2::new(1.0, 1.0), 0.0, &brush), ToolOutput::Nothing);
        assert!(!tools.is_dragging());
    }

    #[test]
    fn pencil_chains_segments() {
        let mut tools = machine();
        let brush = brush(Tool::Pencil);

        tools.pointer_down(Pos2::new(0.0, 0.0), 0.0, &brush);
        tools.pointer_move(Pos2::new(5.0, 0.0), &brush);
        let second = tools.pointer_move(Pos2::new(5.0, 5.0), &brush);

        assert_eq!(
            second,
            ToolOutput::Commit(vec![Primitive::FreehandSegment {
                points: [Pos2::new(5.0, 0.0), Pos2::new(5.0, 5.0)],
                color: Color32::BLACK,
                width: 3.0,
                style: LineStyle::Solid,
            }])
        );
        assert_eq!(tools.pointer_up(Pos2::new(5.0, 5.0), 0.1, &brush), ToolOutput::Nothing);
        assert_eq!(tools.current_state_name(), "Idle");
    }

    #[test]
    fn shape_preview_tracks_the_pointer_without_committing() {
        let mut tools = machine();
        let brush = brush(Tool::Oval);

        tools.pointer_down(Pos2::new(10.0, 10.0), 0.0, &brush);
        assert_eq!(tools.pointer_move(Pos2::new(20.0, 20.0), &brush), ToolOutput::Nothing);
        assert_eq!(tools.pointer_move(Pos2::new(30.0, 25.0), &brush), ToolOutput::Nothing);

        let Some(Primitive::Shape { kind, to, filled, .. }) = tools.preview() else {
            panic!("expected an oval preview");
        };
        assert_eq!(*kind, ShapeKind::Oval);
        assert_eq!(*to, Pos2::new(30.0, 25.0));
        assert!(!filled);
    }

    #[test]
    fn new_pointer_down_discards_the_preview() {
        let mut tools = machine();
        let brush = brush(Tool::Rect);

        tools.pointer_down(Pos2::new(10.0, 10.0), 0.0, &brush);
        tools.pointer_move(Pos2::new(20.0, 20.0), &brush);
        tools.pointer_down(Pos2::new(50.0, 50.0), 1.0, &brush);

        assert!(tools.preview().is_none());
        assert_eq!(tools.pointer_up(Pos2::new(50.0, 50.0), 1.1, &brush), ToolOutput::Nothing);
    }

    #[test]
    fn shape_click_without_motion_commits_nothing() {
        let mut tools = machine();
        let brush = brush(Tool::Line);

        tools.pointer_down(Pos2::new(10.0, 10.0), 0.0, &brush);
        assert_eq!(tools.pointer_up(Pos2::new(10.0, 10.0), 0.2, &brush), ToolOutput::Nothing);
    }

    #[test]
    fn shape_release_without_moves_uses_the_release_point() {
        let mut tools = machine();
        let brush = brush(Tool::Rect);

        tools.pointer_down(Pos2::new(10.0, 10.0), 0.0, &brush);
        assert_eq!(
            tools.pointer_up(Pos2::new(50.0, 40.0), 0.3, &brush),
            ToolOutput::Commit(vec![Primitive::Shape {
                kind: ShapeKind::Rect,
                from: Pos2::new(10.0, 10.0),
                to: Pos2::new(50.0, 40.0),
                color: Color32::BLACK,
                width: 3.0,
                filled: false,
            }])
        );
    }

    #[test]
    fn shape_dragged_back_to_the_anchor_commits_nothing() {
        let mut tools = machine();
        let brush = brush(Tool::Oval);

        tools.pointer_down(Pos2::new(10.0, 10.0), 0.0, &brush);
        tools.pointer_move(Pos2::new(30.0, 30.0), &brush);
        assert_eq!(tools.pointer_up(Pos2::new(10.0, 10.0), 0.4, &brush), ToolOutput::Nothing);
    }

    #[test]
    fn text_release_requests_a_string() {
        let mut tools = machine();
        let brush = brush(Tool::Text);

        tools.pointer_down(Pos2::new(10.0, 10.0), 0.0, &brush);
        assert_eq!(tools.pointer_move(Pos2::new(12.0, 12.0), &brush), ToolOutput::Nothing);
        assert_eq!(
            tools.pointer_up(Pos2::new(12.0, 12.0), 0.1, &brush),
            ToolOutput::RequestText(Pos2::new(12.0, 12.0))
        );
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut tools = machine();
        let brush = brush(Tool::Rect);

        tools.pointer_down(Pos2::new(10.0, 10.0), 0.0, &brush);
        tools.pointer_move(Pos2::new(20.0, 20.0), &brush);
        tools.cancel();

        assert_eq!(*tools.state(), DragState::Idle);
        assert_eq!(tools.pointer_up(Pos2::new(20.0, 20.0), 0.2, &brush), ToolOutput::Nothing);
    }
}
