use egui::Pos2;

/// Smallest width any committed mark may have, in canvas pixels
pub const MIN_LINE_WIDTH: f32 = 1.0;

/// Calculate distance from a point to a line segment (used for stroke coverage)
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = (point_vec.dot(line_vec) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}
