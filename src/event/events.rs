use crate::element::ShapeKind;
use crate::id_generator::ElementId;
use crate::tools::{ClassroomTool, ToolStyle};

/// Changes of the board, broadcast after they happened
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// A pointer press opened a new element
    ElementStarted { id: ElementId, kind: ShapeKind },
    /// The in-progress element moved to the tail of the log
    ElementCommitted {
        id: ElementId,
        kind: ShapeKind,
        log_len: usize,
    },
    /// "Erase all" emptied the log
    LogErased { removed: usize },
    ToolChanged { old: ClassroomTool, new: ClassroomTool },
    StyleChanged { style: ToolStyle },
    SnapshotRestored { elements: usize },
}

impl BoardEvent {
    pub fn summary(&self) -> String {
        match self {
            BoardEvent::ElementStarted { id, kind } => format!("started {} {}", kind.name(), id),
            BoardEvent::ElementCommitted { id, kind, log_len } => {
                format!("committed {} {} ({} in log)", kind.name(), id, log_len)
            }
            BoardEvent::LogErased { removed } => format!("erased {removed} elements"),
            BoardEvent::ToolChanged { old, new } => {
                format!("tool {} -> {}", old.name(), new.name())
            }
            BoardEvent::StyleChanged { style } => format!(
                "pen {} {} {}px",
                style.kind().name(),
                style.color(),
                style.stroke_width()
            ),
            BoardEvent::SnapshotRestored { elements } => format!("restored {elements} elements"),
        }
    }
}
