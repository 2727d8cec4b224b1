use egui::{Color32, Painter, Pos2, Shape, Stroke, Vec2};

mod svg;

pub use svg::to_svg;

use crate::document::DrawingLog;
use crate::element::{DrawingElement, StrokeStyle};
use crate::geometry::{Primitive, PrimitiveGeometry, primitive_for};
use crate::input::StageMapper;
use crate::tools::DEFAULT_PEN_COLOR;

/// Project the committed log and the in-progress element into primitives.
///
/// Log order is kept and the in-progress element comes last so it is drawn on
/// top. Elements that render nothing (single-sample strokes) are skipped.
pub fn render_pass(log: &DrawingLog, in_progress: Option<&DrawingElement>) -> Vec<Primitive> {
    log.elements()
        .iter()
        .chain(in_progress)
        .filter_map(primitive_for)
        .collect()
}

/// Paints primitives onto an egui painter, above the stage content
#[derive(Debug, Clone)]
pub struct Renderer {
    fallback_color: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            fallback_color: crate::element::parse_hex_color(DEFAULT_PEN_COLOR)
                .unwrap_or(Color32::BLUE),
        }
    }

    /// Paint the overlay. Primitives are stage-local; the mapper supplies the stage origin.
    pub fn render(&self, painter: &Painter, mapper: &StageMapper, primitives: &[Primitive]) {
        let origin = mapper.to_viewport(Pos2::ZERO).to_vec2();
        painter.extend(self.to_shapes(primitives, origin));
    }

    /// egui shapes for the primitives, translated by `origin`
    pub fn to_shapes(&self, primitives: &[Primitive], origin: Vec2) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(primitives.len());

        for primitive in primitives {
            let color = self.stroke_color(&primitive.style);
            let stroke = Stroke::new(primitive.style.width(), color);
            let shift = |points: &[Pos2]| points.iter().map(|p| *p + origin).collect::<Vec<_>>();

            match &primitive.geometry {
                PrimitiveGeometry::Path { points } => {
                    shapes.push(Shape::line(shift(points), stroke));
                }
                PrimitiveGeometry::Rect { rect } => {
                    shapes.push(Shape::rect_stroke(rect.translate(origin), 0.0, stroke));
                }
                PrimitiveGeometry::Circle { center, radius } => {
                    shapes.push(Shape::circle_stroke(*center + origin, *radius, stroke));
                }
                PrimitiveGeometry::Line { from, to } => {
                    shapes.push(Shape::line_segment([*from + origin, *to + origin], stroke));
                }
                PrimitiveGeometry::Arrow { from, to, head } => {
                    shapes.push(Shape::line_segment([*from + origin, *to + origin], stroke));
                    shapes.push(Shape::convex_polygon(shift(head), color, Stroke::NONE));
                }
                PrimitiveGeometry::Polygon { points } => {
                    shapes.push(Shape::closed_line(shift(points), stroke));
                }
            }
        }

        shapes
    }

    fn stroke_color(&self, style: &StrokeStyle) -> Color32 {
        style.color32().unwrap_or_else(|err| {
            log::trace!("{err}, painting with the default pen color");
            self.fallback_color
        })
    }
}
