use egui::{Pos2, Vec2, pos2, vec2};

// Marker box of the arrowhead, in units of the stroke width
pub const MARKER_WIDTH: f32 = 10.0;
pub const MARKER_HEIGHT: f32 = 7.0;
pub const MARKER_REF: Pos2 = pos2(9.0, 3.5);
pub const MARKER_TRIANGLE: [Pos2; 3] = [pos2(0.0, 0.0), pos2(10.0, 3.5), pos2(0.0, 7.0)];

/// The filled arrowhead triangle placed at `end`, oriented from `start` to `end`.
///
/// The marker reference point lands on `end` and marker units are scaled by the
/// stroke width. A zero-length segment points along +x.
pub fn arrowhead(start: Pos2, end: Pos2, stroke_width: f32) -> [Pos2; 3] {
    let direction = (end - start).normalized();
    let direction = if direction.x.is_finite() && direction != Vec2::ZERO {
        direction
    } else {
        vec2(1.0, 0.0)
    };
    // marker +y maps to screen +y for a rightward arrow; `rot90` turns the other way
    let normal = -direction.rot90();

    MARKER_TRIANGLE.map(|corner| {
        let local = corner - MARKER_REF;
        end + direction * local.x * stroke_width + normal * local.y * stroke_width
    })
}
