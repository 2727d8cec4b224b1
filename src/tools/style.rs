use serde::{Deserialize, Serialize};

use crate::element::{ShapeKind, StrokeStyle};

pub const DEFAULT_PEN_COLOR: &str = "#3B82F6";
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;
pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 20.0;

/// Colors offered by the pen panel
pub const PALETTE: [&str; 12] = [
    "#FFFFFF", "#9CA3AF", "#4B5563", "#000000",
    "#EF4444", "#F59E0B", "#FACC15", "#4ADE80",
    "#A855F7", "#2DD4BF", "#3B82F6", "#F472B6",
];

/// Pen settings that seed the next element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolStyle {
    color: String,
    stroke_width: f32,
    kind: ShapeKind,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_PEN_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            kind: ShapeKind::Freehand,
        }
    }
}

impl ToolStyle {
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Clamped to `MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH`; NaN becomes the minimum
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = if width.is_nan() {
            MIN_STROKE_WIDTH
        } else {
            width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
        };
    }

    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    /// Copy of the current color and width for a new element
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color.clone(), self.stroke_width)
    }
}
