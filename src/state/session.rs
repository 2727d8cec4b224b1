//! The drawing session: one optional in-progress element plus the committed log.
//!
//! ```text
//!            pointer down (pen)
//!   ┌──────┐ ─────────────────► ┌────────┐ ◄─┐
//!   │ Idle │                    │ Active │   │ pointer move
//!   └──────┘ ◄───────────────── └────────┘ ──┘
//!            pointer up / leave
//!            (element committed)
//! ```
//!
//! Events that do not fit the current state are ignored, so a stray move or up
//! without a preceding down, or a second down while drawing, changes nothing.

use egui::Pos2;

use crate::document::DrawingLog;
use crate::element::{DrawingElement, factory};
use crate::id_generator::ElementId;
use crate::tools::ToolStyle;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Active(DrawingElement),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Active(_) => "Active",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    state: SessionState,
    log: DrawingLog,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    pub fn log(&self) -> &DrawingLog {
        &self.log
    }

    pub fn in_progress(&self) -> Option<&DrawingElement> {
        match &self.state {
            SessionState::Active(element) => Some(element),
            SessionState::Idle => None,
        }
    }

    /// Start a new element seeded from `style` at the stage point `pos`.
    ///
    /// Returns the id of the new element, or `None` when the press was ignored
    /// (the tool does not draw, or an element is already in progress).
    pub fn on_pointer_down(
        &mut self,
        pos: Pos2,
        drawing_tool: bool,
        style: &ToolStyle,
    ) -> Option<ElementId> {
        if !drawing_tool || self.is_active() {
            return None;
        }

        let element = factory::begin_element(style.kind(), style.stroke_style(), pos);
        let id = element.id();
        self.state = SessionState::Active(element);
        Some(id)
    }

    /// Feed a pointer sample to the in-progress element. Returns whether it was used.
    pub fn on_pointer_move(&mut self, pos: Pos2) -> bool {
        match &mut self.state {
            SessionState::Active(element) => {
                element.extend(pos);
                true
            }
            SessionState::Idle => false,
        }
    }

    /// Commit the in-progress element to the tail of the log
    pub fn on_pointer_up(&mut self) -> Option<ElementId> {
        match std::mem::take(&mut self.state) {
            SessionState::Active(element) => {
                let id = element.id();
                self.log.push(element);
                Some(id)
            }
            SessionState::Idle => None,
        }
    }

    /// Leaving the stage while drawing commits, exactly like releasing the pointer
    pub fn on_pointer_leave(&mut self) -> Option<ElementId> {
        self.on_pointer_up()
    }

    /// Empty the committed log. The in-progress element, if any, is kept.
    pub fn erase_all(&mut self) -> usize {
        self.log.clear()
    }

    /// Replace the committed log wholesale; used when restoring a snapshot
    pub(crate) fn replace_log(&mut self, log: DrawingLog) {
        self.log = log;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Shape, ShapeKind};
    use egui::pos2;

    fn pen(kind: ShapeKind) -> ToolStyle {
        let mut style = ToolStyle::default();
        style.set_kind(kind);
        style
    }

    #[test]
    fn test_down_without_pen_is_ignored() {
        let mut session = DrawingSession::new();
        assert!(session.on_pointer_down(pos2(1.0, 1.0), false, &ToolStyle::default()).is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn test_stray_move_and_up_are_noops() {
        let mut session = DrawingSession::new();
        assert!(!session.on_pointer_move(pos2(3.0, 3.0)));
        assert!(session.on_pointer_up().is_none());
        assert!(session.on_pointer_leave().is_none());
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_second_down_while_active_is_ignored() {
        let mut session = DrawingSession::new();
        let style = pen(ShapeKind::Line);
        let first = session.on_pointer_down(pos2(0.0, 0.0), true, &style).unwrap();
        assert!(session.on_pointer_down(pos2(9.0, 9.0), true, &style).is_none());
        assert_eq!(session.in_progress().map(|e| e.id()), Some(first));
    }

    #[test]
    fn test_commit_moves_element_to_log_tail() {
        let mut session = DrawingSession::new();
        let id = session.on_pointer_down(pos2(0.0, 0.0), true, &pen(ShapeKind::Freehand)).unwrap();
        session.on_pointer_move(pos2(10.0, 0.0));
        // in progress is never also in the log
        assert!(session.log().is_empty());

        assert_eq!(session.on_pointer_up(), Some(id));
        assert!(session.in_progress().is_none());
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log().last().unwrap().id(), id);
    }

    #[test]
    fn test_click_without_move_commits_degenerate_shape() {
        let mut session = DrawingSession::new();
        session.on_pointer_down(pos2(4.0, 4.0), true, &pen(ShapeKind::Rectangle));
        session.on_pointer_up();
        assert_eq!(
            session.log().last().unwrap().shape(),
            &Shape::Rectangle {
                start: pos2(4.0, 4.0),
                end: pos2(4.0, 4.0)
            }
        );
    }

    #[test]
    fn test_erase_keeps_in_progress_element() {
        let mut session = DrawingSession::new();
        let style = pen(ShapeKind::Freehand);
        session.on_pointer_down(pos2(0.0, 0.0), true, &style);
        session.on_pointer_up();
        session.on_pointer_down(pos2(5.0, 5.0), true, &style);

        assert_eq!(session.erase_all(), 1);
        assert!(session.log().is_empty());
        assert!(session.is_active());
    }
}
