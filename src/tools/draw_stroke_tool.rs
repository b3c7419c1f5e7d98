use egui::{Color32, Pos2, Vec2};
use rand::Rng;

use crate::element::{LineStyle, Primitive, factory};
use crate::state::BrushState;

/// Segments a crayon lays down per pointer move
pub const CRAYON_PASSES: usize = 3;

/// One solid segment in the brush color
pub(super) fn pencil_segment(from: Pos2, to: Pos2, brush: &BrushState) -> Primitive {
    factory::segment(from, to, brush.color, brush.width(), LineStyle::Solid)
}

/// A pencil segment painted in the canvas background
pub(super) fn eraser_segment(
    from: Pos2,
    to: Pos2,
    brush: &BrushState,
    background: Color32,
) -> Primitive {
    factory::segment(from, to, background, brush.width(), LineStyle::Solid)
}

/// Thinner sketchy segments, each shifted by its own integer offset in `[-jitter, jitter]`
pub(super) fn crayon_segments(
    from: Pos2,
    to: Pos2,
    brush: &BrushState,
    jitter: u8,
    rng: &mut impl Rng,
) -> Vec<Primitive> {
    let width = (brush.width() - 1.0).max(1.0);
    let jitter = i32::from(jitter);

    (0..CRAYON_PASSES)
        .map(|_| {
            let offset = Vec2::new(
                rng.random_range(-jitter..=jitter) as f32,
                rng.random_range(-jitter..=jitter) as f32,
            );
            factory::segment(from + offset, to + offset, brush.color, width, LineStyle::Sketchy)
        })
        .collect()
}
