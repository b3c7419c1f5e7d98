//! Software rasterizer used by the PNG export.
//!
//! Coverage is decided per pixel center. Shapes are hard-edged; only text is
//! anti-aliased, using the glyph coverage reported by `ab_glyph`.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};

use crate::element::{LineStyle, Primitive, ShapeKind, distance_to_line_segment};

/// Flatten primitives, in order, onto a canvas of the given size
pub fn rasterize<'a>(
    primitives: impl IntoIterator<Item = &'a Primitive>,
    width: u32,
    height: u32,
    background: Color32,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, to_rgba(background));
    let mut font: Option<Option<FontArc>> = None;

    for primitive in primitives {
        match primitive {
            Primitive::FreehandSegment { points, color, width, style } => {
                stroke_segment(&mut canvas, points[0], points[1], *width, *color, *style);
            }
            Primitive::Shape { kind, from, to, color, width, filled } => match (kind, filled) {
                (ShapeKind::Line, _) => {
                    stroke_segment(&mut canvas, *from, *to, *width, *color, LineStyle::Solid);
                }
                (ShapeKind::Rect, false) => stroke_rect(&mut canvas, *from, *to, *width, *color),
                (ShapeKind::Rect, true) => {
                    let rect = Rect::from_two_pos(*from, *to);
                    cover(&mut canvas, rect, *color, false, |p| rect.contains(p));
                }
                (ShapeKind::Oval, false) => stroke_oval(&mut canvas, *from, *to, *width, *color),
                (ShapeKind::Oval, true) => {
                    let rect = Rect::from_two_pos(*from, *to);
                    let (center, rx, ry) = (rect.center(), rect.width() / 2.0, rect.height() / 2.0);
                    cover(&mut canvas, rect, *color, false, |p| in_ellipse(p, center, rx, ry));
                }
            },
            Primitive::Text { position, content, color, size } => {
                if let Some(font) = font.get_or_insert_with(default_font) {
                    draw_text(&mut canvas, font, *position, content, *color, *size);
                }
            }
        }
    }

    canvas
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Pixel indices whose centers may fall inside `[min, max]`, clipped to `0..limit`
fn pixel_span(min: f32, max: f32, limit: u32) -> std::ops::Range<u32> {
    let start = (min.floor().max(0.0) as u32).min(limit);
    let end = (max.ceil().max(0.0) as u32).min(limit);
    start..end.max(start)
}

/// Paint every pixel in `bounds` whose center satisfies `inside`.
/// A stippled fill only touches every other pixel, checkerboard style.
fn cover(
    canvas: &mut RgbaImage,
    bounds: Rect,
    color: Color32,
    stipple: bool,
    inside: impl Fn(Pos2) -> bool,
) {
    let rgba = to_rgba(color);
    for y in pixel_span(bounds.min.y, bounds.max.y, canvas.height()) {
        for x in pixel_span(bounds.min.x, bounds.max.x, canvas.width()) {
            if stipple && (x + y) % 2 == 1 {
                continue;
            }
            if inside(Pos2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                canvas.put_pixel(x, y, rgba);
            }
        }
    }
}

fn stroke_segment(
    canvas: &mut RgbaImage,
    a: Pos2,
    b: Pos2,
    width: f32,
    color: Color32,
    style: LineStyle,
) {
    let half = width / 2.0;
    let bounds = Rect::from_two_pos(a, b).expand(half);
    cover(canvas, bounds, color, style == LineStyle::Sketchy, |p| {
        distance_to_line_segment(p, a, b) <= half
    });
}

fn stroke_rect(canvas: &mut RgbaImage, from: Pos2, to: Pos2, width: f32, color: Color32) {
    let half = width / 2.0;
    let rect = Rect::from_two_pos(from, to);
    let outer = rect.expand(half);
    let inner = rect.shrink(half);
    cover(canvas, outer, color, false, |p| {
        outer.contains(p) && !(inner.is_positive() && inner.contains(p))
    });
}

fn stroke_oval(canvas: &mut RgbaImage, from: Pos2, to: Pos2, width: f32, color: Color32) {
    let half = width / 2.0;
    let rect = Rect::from_two_pos(from, to);
    let (center, rx, ry) = (rect.center(), rect.width() / 2.0, rect.height() / 2.0);
    cover(canvas, rect.expand(half), color, false, |p| {
        in_ellipse(p, center, rx + half, ry + half) && !in_ellipse(p, center, rx - half, ry - half)
    });
}

fn in_ellipse(p: Pos2, center: Pos2, rx: f32, ry: f32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (p.x - center.x) / rx;
    let dy = (p.y - center.y) / ry;
    dx * dx + dy * dy <= 1.0
}

/// The proportional font egui renders on screen, so the export matches the canvas
fn default_font() -> Option<FontArc> {
    let definitions = egui::FontDefinitions::default();
    let data = definitions
        .families
        .get(&egui::FontFamily::Proportional)
        .and_then(|names| names.first())
        .and_then(|name| definitions.font_data.get(name));

    let Some(data) = data else {
        log::warn!("No default proportional font available, text is left out of the export");
        return None;
    };

    match FontArc::try_from_vec(data.font.to_vec()) {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Failed to parse default font: {err}");
            None
        }
    }
}

/// Single line of text, top-left anchored at `position`
fn draw_text(
    canvas: &mut RgbaImage,
    font: &FontArc,
    position: Pos2,
    content: &str,
    color: Color32,
    size: f32,
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let baseline = position.y + scaled.ascent();
    let mut caret = position.x;
    let mut previous = None;
    let [r, g, b, _] = color.to_srgba_unmultiplied();

    for ch in content.chars().filter(|ch| !ch.is_control()) {
        let id = font.glyph_id(ch);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i64 + gx as i64;
            let y = bounds.min.y as i64 + gy as i64;
            if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
                return;
            }
            let coverage = coverage.clamp(0.0, 1.0);
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            for (channel, source) in pixel.0.iter_mut().zip([r, g, b]) {
                let blended = source as f32 * coverage + *channel as f32 * (1.0 - coverage);
                *channel = blended.round() as u8;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn empty_canvas_is_background() {
        let image = rasterize(std::iter::empty(), 4, 3, Color32::WHITE);
        assert_eq!(image.dimensions(), (4, 3));
        assert!(image.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn outlined_rect_leaves_interior_untouched() {
        let (from, to) = (Pos2::new(10.0, 10.0), Pos2::new(50.0, 40.0));
        let rect = factory::outline(ShapeKind::Rect, from, to, Color32::RED, 3.0);
        let image = rasterize([&rect], 64, 64, Color32::WHITE);

        assert_eq!(*image.get_pixel(10, 25), RED);
        assert_eq!(*image.get_pixel(30, 10), RED);
        assert_eq!(*image.get_pixel(30, 25), WHITE);
        assert_eq!(*image.get_pixel(60, 60), WHITE);
    }

    #[test]
    fn sketchy_segments_are_stippled() {
        let (from, to) = (Pos2::new(0.0, 5.0), Pos2::new(20.0, 5.0));
        let line = factory::segment(from, to, Color32::RED, 6.0, LineStyle::Sketchy);
        let image = rasterize([&line], 20, 10, Color32::WHITE);

        assert_eq!(*image.get_pixel(4, 4), RED);
        assert_eq!(*image.get_pixel(5, 4), WHITE);
    }

    #[test]
    fn shapes_outside_the_canvas_are_clipped() {
        let (from, to) = (Pos2::new(-30.0, -30.0), Pos2::new(500.0, 2.0));
        let rect = factory::filled_rect(from, to, Color32::RED, 1.0);
        let image = rasterize([&rect], 8, 8, Color32::WHITE);

        assert_eq!(*image.get_pixel(7, 1), RED);
        assert_eq!(*image.get_pixel(7, 2), WHITE);
    }

    #[test]
    fn oval_outline_is_a_ring() {
        let (from, to) = (Pos2::new(0.0, 0.0), Pos2::new(40.0, 20.0));
        let oval = factory::outline(ShapeKind::Oval, from, to, Color32::RED, 2.0);
        let image = rasterize([&oval], 40, 20, Color32::WHITE);

        assert_eq!(*image.get_pixel(20, 10), WHITE);
        assert_eq!(*image.get_pixel(0, 10), RED);
        assert_eq!(*image.get_pixel(20, 0), RED);
    }

    #[test]
    fn text_marks_pixels_near_its_anchor() {
        let text = factory::text(Pos2::new(2.0, 2.0), "W", Color32::BLACK, 24.0);
        let image = rasterize([&text], 40, 40, Color32::WHITE);

        assert!(image.pixels().any(|p| *p != WHITE));
    }
}
