//! Standalone SVG export of the drawing overlay.

use egui::{Pos2, Vec2};

use crate::geometry::{
    LineCap, MARKER_HEIGHT, MARKER_REF, MARKER_TRIANGLE, MARKER_WIDTH, Primitive, PrimitiveGeometry,
};

const ARROWHEAD_MARKER_ID: &str = "arrowhead";

/// Render primitives as an SVG document of the given stage size.
///
/// Every primitive becomes exactly one element, all stroke-only. The arrowhead
/// marker is always declared in `<defs>` so arrows can reference it.
pub fn to_svg(primitives: &[Primitive], size: Vec2) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        size.x, size.y, size.x, size.y
    );
    svg.push('\n');
    svg.push_str(&marker_defs());

    for primitive in primitives {
        svg.push_str("  ");
        svg.push_str(&element_for(primitive));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn marker_defs() -> String {
    let triangle = MARKER_TRIANGLE
        .iter()
        .map(|p| format!("{} {}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(", ");

    let (ref_x, ref_y) = (MARKER_REF.x, MARKER_REF.y);

    let mut defs = String::from("  <defs>\n");
    defs.push_str(&format!(
        r#"    <marker id="{ARROWHEAD_MARKER_ID}" markerWidth="{MARKER_WIDTH}""#
    ));
    defs.push_str(&format!(
        r#" markerHeight="{MARKER_HEIGHT}" refX="{ref_x}" refY="{ref_y}" orient="auto">"#
    ));
    defs.push_str(&format!(
        "\n      <polygon points=\"{triangle}\" fill=\"context-stroke\"/>\n"
    ));
    defs.push_str("    </marker>\n  </defs>\n");
    defs
}

fn element_for(primitive: &Primitive) -> String {
    let paint = format!(
        r#"stroke="{}" stroke-width="{}" fill="none""#,
        escape_attr(primitive.style.color()),
        primitive.style.width()
    );
    let cap = match primitive.cap {
        LineCap::Round => r#" stroke-linecap="round""#,
        LineCap::Butt => "",
    };

    match &primitive.geometry {
        PrimitiveGeometry::Path { points } => {
            format!(r#"<path d="{}" {paint}{cap} stroke-linejoin="round"/>"#, path_data(points))
        }
        PrimitiveGeometry::Rect { rect } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {paint}/>"#,
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height()
        ),
        PrimitiveGeometry::Circle { center, radius } => {
            format!(r#"<circle cx="{}" cy="{}" r="{}" {paint}/>"#, center.x, center.y, radius)
        }
        PrimitiveGeometry::Line { from, to } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {paint}{cap}/>"#,
            from.x, from.y, to.x, to.y
        ),
        PrimitiveGeometry::Arrow { from, to, .. } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {paint}{cap} marker-end="url(#{})"/>"#,
            from.x, from.y, to.x, to.y, ARROWHEAD_MARKER_ID
        ),
        PrimitiveGeometry::Polygon { points } => {
            format!(r#"<polygon points="{}" {paint}/>"#, polygon_points(points))
        }
    }
}

fn path_data(points: &[Pos2]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {} {}", if i == 0 { "M" } else { "L" }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn polygon_points(points: &[Pos2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DrawingLog;
    use crate::element::{ShapeKind, StrokeStyle, factory};
    use crate::renderer::render_pass;
    use egui::{pos2, vec2};

    fn export(kind: ShapeKind) -> String {
        let element = factory::create_shape(
            kind,
            pos2(5.0, 5.0),
            pos2(25.0, 15.0),
            StrokeStyle::new("#FF0000", 6.0),
        );
        to_svg(&render_pass(&DrawingLog::new(), Some(&element)), vec2(640.0, 480.0))
    }

    #[test]
    fn test_rectangle_export() {
        let svg = export(ShapeKind::Rectangle);
        assert!(svg.contains(
            r##"<rect x="5" y="5" width="20" height="10" stroke="#FF0000" stroke-width="6" fill="none"/>"##
        ));
    }

    #[test]
    fn test_marker_is_always_declared() {
        let svg = to_svg(&[], vec2(10.0, 10.0));
        assert!(svg.contains(
            r#"<marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5""#
        ));
        assert!(svg.contains(r#"points="0 0, 10 3.5, 0 7""#));
    }

    #[test]
    fn test_arrow_references_marker() {
        let svg = export(ShapeKind::Arrow);
        assert!(svg.contains(r#"marker-end="url(#arrowhead)""#));
    }

    #[test]
    fn test_freehand_path_data() {
        let stroke = factory::create_freehand(
            vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)],
            StrokeStyle::new("#000000", 2.0),
        );
        let svg = to_svg(&render_pass(&DrawingLog::new(), Some(&stroke)), vec2(50.0, 50.0));
        assert!(svg.contains(r#"d="M 0 0 L 10 0 L 10 10""#));
        assert!(svg.contains(r#"stroke-linecap="round" stroke-linejoin="round""#));
    }

    #[test]
    fn test_one_element_per_primitive() {
        let style = StrokeStyle::new("#000000", 2.0);
        let mut log = DrawingLog::new();
        for kind in ShapeKind::PANEL_ORDER {
            let mut element = factory::begin_element(kind, style.clone(), pos2(0.0, 0.0));
            element.extend(pos2(30.0, 20.0));
            log.push(element);
        }
        let svg = to_svg(&render_pass(&log, None), vec2(100.0, 100.0));

        // one per primitive plus the marker triangle
        let drawn = ["<path", "<rect", "<circle", "<line", "<polygon"]
            .iter()
            .map(|tag| svg.matches(tag).count())
            .sum::<usize>();
        assert_eq!(drawn, ShapeKind::PANEL_ORDER.len() + 1);
    }

    #[test]
    fn test_color_is_escaped() {
        let element = factory::create_shape(
            ShapeKind::Line,
            pos2(0.0, 0.0),
            pos2(1.0, 1.0),
            StrokeStyle::new("\"><x", 1.0),
        );
        let svg = to_svg(&render_pass(&DrawingLog::new(), Some(&element)), vec2(1.0, 1.0));
        assert!(svg.contains("stroke=\"&quot;&gt;&lt;x\""));
    }
}
