use egui::Pos2;
use serde::{Deserialize, Serialize};

/// The shape a new pen element will have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Freehand,
    Rectangle,
    Circle,
    Line,
    Arrow,
    Triangle,
    Diamond,
    Star,
}

impl ShapeKind {
    /// Shapes in the order the pen panel lists them
    pub const PANEL_ORDER: [ShapeKind; 8] = [
        ShapeKind::Freehand,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Line,
        ShapeKind::Star,
        ShapeKind::Diamond,
        ShapeKind::Arrow,
        ShapeKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Freehand => "freehand",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Star => "star",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ShapeKind::Freehand => "✏",
            ShapeKind::Rectangle => "▭",
            ShapeKind::Circle => "◯",
            ShapeKind::Line => "╱",
            ShapeKind::Arrow => "➚",
            ShapeKind::Triangle => "△",
            ShapeKind::Diamond => "◇",
            ShapeKind::Star => "☆",
        }
    }
}

/// Geometry of an element. Freehand keeps every sample, the other kinds keep the
/// pointer-down position and the latest pointer position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Freehand { points: Vec<Pos2> },
    Rectangle { start: Pos2, end: Pos2 },
    /// `center` is where the drag started, `rim` any point on the circle
    Circle { center: Pos2, rim: Pos2 },
    Line { start: Pos2, end: Pos2 },
    Arrow { start: Pos2, end: Pos2 },
    Triangle { start: Pos2, end: Pos2 },
    Diamond { start: Pos2, end: Pos2 },
    Star { start: Pos2, end: Pos2 },
}

impl Shape {
    /// The geometry of a freshly pressed element of `kind` at `pos`
    pub fn seed(kind: ShapeKind, pos: Pos2) -> Self {
        match kind {
            ShapeKind::Freehand => Shape::Freehand { points: vec![pos] },
            ShapeKind::Rectangle => Shape::Rectangle { start: pos, end: pos },
            ShapeKind::Circle => Shape::Circle { center: pos, rim: pos },
            ShapeKind::Line => Shape::Line { start: pos, end: pos },
            ShapeKind::Arrow => Shape::Arrow { start: pos, end: pos },
            ShapeKind::Triangle => Shape::Triangle { start: pos, end: pos },
            ShapeKind::Diamond => Shape::Diamond { start: pos, end: pos },
            ShapeKind::Star => Shape::Star { start: pos, end: pos },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Freehand { .. } => ShapeKind::Freehand,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Arrow { .. } => ShapeKind::Arrow,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Diamond { .. } => ShapeKind::Diamond,
            Shape::Star { .. } => ShapeKind::Star,
        }
    }

    /// Feed a pointer sample: freehand appends it, the others move their end anchor
    pub fn extend(&mut self, pos: Pos2) {
        match self {
            Shape::Freehand { points } => points.push(pos),
            Shape::Circle { rim, .. } => *rim = pos,
            Shape::Rectangle { end, .. }
            | Shape::Line { end, .. }
            | Shape::Arrow { end, .. }
            | Shape::Triangle { end, .. }
            | Shape::Diamond { end, .. }
            | Shape::Star { end, .. } => *end = pos,
        }
    }

    /// The `(start, end)` anchors of two-point shapes; `None` for freehand
    pub fn anchors(&self) -> Option<(Pos2, Pos2)> {
        match *self {
            Shape::Freehand { .. } => None,
            Shape::Circle { center, rim } => Some((center, rim)),
            Shape::Rectangle { start, end }
            | Shape::Line { start, end }
            | Shape::Arrow { start, end }
            | Shape::Triangle { start, end }
            | Shape::Diamond { start, end }
            | Shape::Star { start, end } => Some((start, end)),
        }
    }

    /// Freehand samples in event order; empty for two-point shapes
    pub fn points(&self) -> &[Pos2] {
        match self {
            Shape::Freehand { points } => points,
            _ => &[],
        }
    }
}
