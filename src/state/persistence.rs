use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::BoardContext;
use crate::document::DrawingLog;
use crate::error::{BoardError, BoardResult};
use crate::id_generator;
use crate::tools::ToolStyle;
use crate::util::time;

pub const SNAPSHOT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// On-demand JSON export of the committed log and the pen style.
///
/// Snapshots are only taken and restored explicitly; nothing is saved when the
/// app closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Version of the crate that wrote the snapshot
    pub version: String,
    /// Seconds since the UNIX epoch when the snapshot was taken
    pub timestamp: u64,
    pub style: ToolStyle,
    pub elements: DrawingLog,
}

impl BoardSnapshot {
    /// Capture the committed log; an element still being drawn is not included
    pub fn capture(board: &BoardContext) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            timestamp: time::timestamp_secs(),
            style: board.style().clone(),
            elements: board.session().log().clone(),
        }
    }

    pub fn to_json(&self) -> BoardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the board's log and pen style with the snapshot's.
    ///
    /// The board is left untouched when the snapshot is rejected: element
    /// widths must be positive and finite, ids unique, and there must be room
    /// for new ids after the highest one. The pen width is clamped like any
    /// width set from the pen panel.
    pub fn restore(self, board: &mut BoardContext) -> BoardResult<()> {
        if self.version != SNAPSHOT_VERSION {
            log::warn!(
                "Snapshot version {} differs from current version {}",
                self.version,
                SNAPSHOT_VERSION
            );
        }

        self.validate_elements()?;
        if let Some(max_id) = self.elements.elements().iter().map(|e| e.id()).max() {
            id_generator::reserve_through(max_id)?;
        }

        let mut style = self.style;
        style.set_stroke_width(style.stroke_width());

        board.restore(self.elements, style);
        Ok(())
    }

    fn validate_elements(&self) -> BoardResult<()> {
        let mut seen = HashSet::with_capacity(self.elements.len());
        for element in self.elements.elements() {
            let width = element.style().width();
            if !width.is_finite() || width <= 0.0 {
                return Err(BoardError::InvalidStrokeWidth {
                    element: element.id(),
                    width,
                });
            }
            if !seen.insert(element.id()) {
                return Err(BoardError::DuplicateElementId(element.id()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ShapeKind;
    use crate::error::BoardError;
    use crate::tools::{ClassroomTool, RailAction};
    use egui::pos2;

    fn drawn_board() -> BoardContext {
        let mut board = BoardContext::new();
        board.click_rail(RailAction::Select(ClassroomTool::Pen));
        board.set_kind(ShapeKind::Star);
        board.set_color("#FACC15");
        board.pointer_down(pos2(0.0, 0.0));
        board.pointer_move(pos2(40.0, 40.0));
        board.pointer_up();
        board
    }

    #[test]
    fn test_json_round_trip_restores_log() {
        let board = drawn_board();
        let json = BoardSnapshot::capture(&board).to_json().unwrap();
        assert!(json.contains("\"kind\": \"star\""));

        let mut restored = BoardContext::new();
        BoardSnapshot::from_json(&json).unwrap().restore(&mut restored).unwrap();

        assert_eq!(restored.session().log(), board.session().log());
        assert_eq!(restored.style(), board.style());
    }

    #[test]
    fn test_in_progress_element_is_not_captured() {
        let mut board = drawn_board();
        board.pointer_down(pos2(5.0, 5.0));
        let snapshot = BoardSnapshot::capture(&board);
        assert_eq!(snapshot.elements.len(), 1);
    }

    fn snapshot_json(style_width: f32, elements: &str) -> String {
        format!(
            r##"{{"version":"{SNAPSHOT_VERSION}","timestamp":0,
                "style":{{"color":"#3B82F6","stroke_width":{style_width},"kind":"line"}},
                "elements":[{elements}]}}"##
        )
    }

    fn line_json(id: usize, width: f32) -> String {
        format!(
            r##"{{"id":{id},"style":{{"color":"#000000","width":{width}}},
                "shape":{{"kind":"line","start":{{"x":0.0,"y":0.0}},"end":{{"x":5.0,"y":5.0}}}}}}"##
        )
    }

    #[test]
    fn test_restored_pen_width_is_clamped() {
        let json = snapshot_json(500.0, &line_json(1, 2.0));
        let mut board = BoardContext::new();
        BoardSnapshot::from_json(&json).unwrap().restore(&mut board).unwrap();
        assert_eq!(board.style().stroke_width(), 20.0);

        board.click_rail(RailAction::Select(ClassroomTool::Pen));
        board.pointer_down(pos2(1.0, 1.0));
        board.pointer_up();
        assert_eq!(board.session().log().last().unwrap().style().width(), 20.0);
    }

    #[test]
    fn test_non_positive_element_width_is_rejected() {
        let mut board = drawn_board();
        let before = board.session().log().clone();

        let json = snapshot_json(4.0, &line_json(1, -3.0));
        let err = BoardSnapshot::from_json(&json).unwrap().restore(&mut board).unwrap_err();

        assert!(matches!(err, BoardError::InvalidStrokeWidth { width, .. } if width == -3.0));
        assert_eq!(board.session().log(), &before);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let elements = format!("{},{}", line_json(3, 2.0), line_json(3, 4.0));
        let json = snapshot_json(4.0, &elements);
        let mut board = BoardContext::new();

        let err = BoardSnapshot::from_json(&json).unwrap().restore(&mut board).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateElementId(id) if id.value() == 3));
        assert!(board.session().log().is_empty());
    }

    #[test]
    fn test_last_possible_id_is_rejected() {
        let json = snapshot_json(4.0, &line_json(usize::MAX, 2.0));
        let mut board = BoardContext::new();

        let err = BoardSnapshot::from_json(&json).unwrap().restore(&mut board).unwrap_err();
        assert!(matches!(err, BoardError::IdSpaceExhausted(_)));
        assert!(board.session().log().is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = BoardSnapshot::from_json("{\"version\": 3").unwrap_err();
        assert!(matches!(err, BoardError::Snapshot(_)));
    }
}
