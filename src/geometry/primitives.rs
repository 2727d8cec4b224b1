use std::f32::consts::PI;

use egui::{Pos2, Rect, pos2, vec2};

use super::arrowhead::arrowhead;
use crate::element::{DrawingElement, Shape, StrokeStyle};
use crate::id_generator::ElementId;

pub const STAR_POINTS: usize = 5;

/// How open path ends are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

/// Renderable outline of one element, in stage-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveGeometry {
    /// Open polyline through the points in order
    Path { points: Vec<Pos2> },
    Rect { rect: Rect },
    Circle { center: Pos2, radius: f32 },
    Line { from: Pos2, to: Pos2 },
    /// A line with a filled arrowhead at `to`
    Arrow { from: Pos2, to: Pos2, head: [Pos2; 3] },
    /// Closed outline through the points in order
    Polygon { points: Vec<Pos2> },
}

/// A stroke-only vector primitive derived from a drawing element
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub element: ElementId,
    pub style: StrokeStyle,
    pub cap: LineCap,
    pub geometry: PrimitiveGeometry,
}

/// Map an element to its primitive. Freehand strokes with fewer than two
/// samples produce nothing.
pub fn primitive_for(element: &DrawingElement) -> Option<Primitive> {
    let style = element.style();
    let (cap, geometry) = match element.shape() {
        Shape::Freehand { points } => {
            if points.len() < 2 {
                return None;
            }
            (LineCap::Round, PrimitiveGeometry::Path { points: points.clone() })
        }
        Shape::Rectangle { start, end } => (
            LineCap::Butt,
            PrimitiveGeometry::Rect {
                rect: bounding_box(*start, *end),
            },
        ),
        Shape::Circle { center, rim } => (
            LineCap::Butt,
            PrimitiveGeometry::Circle {
                center: *center,
                radius: center.distance(*rim),
            },
        ),
        Shape::Line { start, end } => (
            LineCap::Round,
            PrimitiveGeometry::Line {
                from: *start,
                to: *end,
            },
        ),
        Shape::Arrow { start, end } => (
            LineCap::Round,
            PrimitiveGeometry::Arrow {
                from: *start,
                to: *end,
                head: arrowhead(*start, *end, style.width()),
            },
        ),
        Shape::Triangle { start, end } => (LineCap::Butt, polygon(&triangle(*start, *end))),
        Shape::Diamond { start, end } => (LineCap::Butt, polygon(&diamond(*start, *end))),
        Shape::Star { start, end } => (LineCap::Butt, polygon(&star(*start, *end))),
    };

    Some(Primitive {
        element: element.id(),
        style: style.clone(),
        cap,
        geometry,
    })
}

/// Axis-aligned box spanned by two corners, independent of drag direction
fn polygon(points: &[Pos2]) -> PrimitiveGeometry {
    PrimitiveGeometry::Polygon {
        points: points.to_vec(),
    }
}

pub fn bounding_box(start: Pos2, end: Pos2) -> Rect {
    Rect::from_min_size(
        pos2(start.x.min(end.x), start.y.min(end.y)),
        vec2((start.x - end.x).abs(), (start.y - end.y).abs()),
    )
}

/// Apex on the start row at the horizontal midpoint, base on the end row
pub fn triangle(start: Pos2, end: Pos2) -> [Pos2; 3] {
    [
        pos2((start.x + end.x) / 2.0, start.y),
        pos2(start.x, end.y),
        pos2(end.x, end.y),
    ]
}

/// Top, right, bottom, left midpoints of the anchors' box
pub fn diamond(start: Pos2, end: Pos2) -> [Pos2; 4] {
    let mid = start.lerp(end, 0.5);
    [
        pos2(mid.x, start.y),
        pos2(end.x, mid.y),
        pos2(mid.x, end.y),
        pos2(start.x, mid.y),
    ]
}

/// Five-pointed star centered in the anchors' box, apex up
pub fn star(start: Pos2, end: Pos2) -> [Pos2; STAR_POINTS * 2] {
    let center = start.lerp(end, 0.5);
    let outer = (start.x - end.x).abs().min((start.y - end.y).abs()) / 2.0;
    let inner = outer / 2.0;

    std::array::from_fn(|i| {
        let angle = PI / STAR_POINTS as f32 * i as f32 - PI / 2.0;
        let radius = if i % 2 == 0 { outer } else { inner };
        pos2(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeKind, factory};

    fn style() -> StrokeStyle {
        StrokeStyle::new("#3B82F6", 4.0)
    }

    #[test]
    fn test_rectangle_is_order_independent() {
        let expected = Rect::from_min_size(pos2(10.0, 10.0), vec2(40.0, 30.0));
        assert_eq!(bounding_box(pos2(10.0, 10.0), pos2(50.0, 40.0)), expected);
        assert_eq!(bounding_box(pos2(50.0, 40.0), pos2(10.0, 10.0)), expected);
    }

    #[test]
    fn test_circle_radius_is_distance() {
        let el = factory::create_shape(ShapeKind::Circle, pos2(0.0, 0.0), pos2(3.0, 4.0), style());
        let prim = primitive_for(&el).unwrap();
        assert_eq!(
            prim.geometry,
            PrimitiveGeometry::Circle {
                center: pos2(0.0, 0.0),
                radius: 5.0
            }
        );
    }

    #[test]
    fn test_single_sample_freehand_renders_nothing() {
        let el = factory::create_freehand(vec![pos2(1.0, 1.0)], style());
        assert!(primitive_for(&el).is_none());
    }

    #[test]
    fn test_triangle_formula() {
        assert_eq!(
            triangle(pos2(0.0, 0.0), pos2(20.0, 10.0)),
            [pos2(10.0, 0.0), pos2(0.0, 10.0), pos2(20.0, 10.0)]
        );
    }

    #[test]
    fn test_diamond_formula() {
        assert_eq!(
            diamond(pos2(0.0, 0.0), pos2(20.0, 10.0)),
            [pos2(10.0, 0.0), pos2(20.0, 5.0), pos2(10.0, 10.0), pos2(0.0, 5.0)]
        );
    }

    #[test]
    fn test_star_uses_smaller_dimension() {
        let points = star(pos2(0.0, 0.0), pos2(40.0, 20.0));
        let center = pos2(20.0, 10.0);
        // apex straight up at the outer radius
        assert!((points[0] - pos2(20.0, 0.0)).length() < 1e-4);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((center.distance(*p) - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_open_shapes_use_round_caps() {
        let line = factory::create_shape(ShapeKind::Line, pos2(0.0, 0.0), pos2(5.0, 5.0), style());
        let rect = factory::create_shape(
            ShapeKind::Rectangle,
            pos2(0.0, 0.0),
            pos2(5.0, 5.0),
            style(),
        );
        assert_eq!(primitive_for(&line).unwrap().cap, LineCap::Round);
        assert_eq!(primitive_for(&rect).unwrap().cap, LineCap::Butt);
    }
}
