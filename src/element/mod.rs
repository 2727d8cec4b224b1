use serde::{Deserialize, Serialize};

mod common;
mod shape;

pub use common::{StrokeStyle, parse_hex_color};
pub use shape::{Shape, ShapeKind};

use crate::id_generator::{self, ElementId};

/// A stroke or shape on the stage, either in progress or committed to the log.
///
/// The style is fixed at creation; only the geometry grows while the pointer
/// is held down, and only through the drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingElement {
    id: ElementId,
    style: StrokeStyle,
    shape: Shape,
}

impl DrawingElement {
    pub(crate) fn new(id: ElementId, style: StrokeStyle, shape: Shape) -> Self {
        Self { id, style, shape }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn extend(&mut self, pos: egui::Pos2) {
        self.shape.extend(pos);
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use egui::Pos2;

    /// Open a new element of `kind` at the pointer-down position
    pub fn begin_element(kind: ShapeKind, style: StrokeStyle, pos: Pos2) -> DrawingElement {
        DrawingElement::new(id_generator::generate_id(), style, Shape::seed(kind, pos))
    }

    /// Create a finished freehand stroke from a list of samples
    pub fn create_freehand(points: Vec<Pos2>, style: StrokeStyle) -> DrawingElement {
        DrawingElement::new(id_generator::generate_id(), style, Shape::Freehand { points })
    }

    /// Create a finished two-point shape of `kind`
    pub fn create_shape(
        kind: ShapeKind,
        start: Pos2,
        end: Pos2,
        style: StrokeStyle,
    ) -> DrawingElement {
        let mut shape = Shape::seed(kind, start);
        shape.extend(end);
        DrawingElement::new(id_generator::generate_id(), style, shape)
    }
}
