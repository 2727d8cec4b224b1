use thiserror::Error;

use crate::id_generator::ElementId;

/// Errors raised outside the drawing path (color parsing and snapshots)
#[derive(Debug, Error)]
pub enum BoardError {
    /// The style color is not a `#RGB`, `#RRGGBB` or `#RRGGBBAA` hex color
    #[error("Unsupported color value: {0:?}")]
    InvalidColor(String),

    #[error("Failed to (de)serialize board snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A restored element's stroke width is not a positive finite number
    #[error("Element {element} has an invalid stroke width {width}")]
    InvalidStrokeWidth { element: ElementId, width: f32 },

    #[error("Element id {0} appears more than once in the snapshot")]
    DuplicateElementId(ElementId),

    /// No id is left after this one, so new elements could not be numbered
    #[error("Element id {0} leaves no room for new elements")]
    IdSpaceExhausted(ElementId),
}

/// Result type for board operations that can fail
pub type BoardResult<T> = Result<T, BoardError>;
