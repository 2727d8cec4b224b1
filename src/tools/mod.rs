use serde::{Deserialize, Serialize};

mod style;

pub use style::{
    DEFAULT_PEN_COLOR, DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, PALETTE, ToolStyle,
};

/// Interaction modes of the classroom tool rail. Only the pen draws on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassroomTool {
    #[default]
    Pointer,
    Pen,
    Text,
    Hand,
}

impl ClassroomTool {
    pub fn name(self) -> &'static str {
        match self {
            ClassroomTool::Pointer => "Pointer",
            ClassroomTool::Pen => "Pen",
            ClassroomTool::Text => "Text",
            ClassroomTool::Hand => "Hand",
        }
    }

    pub fn engages_drawing(self) -> bool {
        matches!(self, ClassroomTool::Pen)
    }

    /// The tool that is active after clicking `self` on the rail while `current` is active
    pub fn toggled_from(self, current: ClassroomTool) -> ClassroomTool {
        if self == current {
            ClassroomTool::Pointer
        } else {
            self
        }
    }
}

/// What a click on a tool rail button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailAction {
    Select(ClassroomTool),
    /// Clear the whole drawing log; not a mode
    Erase,
}

impl RailAction {
    /// Buttons of the rail, top to bottom
    pub const RAIL: [RailAction; 5] = [
        RailAction::Select(ClassroomTool::Pointer),
        RailAction::Select(ClassroomTool::Pen),
        RailAction::Select(ClassroomTool::Text),
        RailAction::Erase,
        RailAction::Select(ClassroomTool::Hand),
    ];

    pub fn icon(self) -> &'static str {
        match self {
            RailAction::Select(ClassroomTool::Pointer) => "↖",
            RailAction::Select(ClassroomTool::Pen) => "✏",
            RailAction::Select(ClassroomTool::Text) => "T",
            RailAction::Select(ClassroomTool::Hand) => "✋",
            RailAction::Erase => "⌫",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RailAction::Select(tool) => tool.name(),
            RailAction::Erase => "Erase all",
        }
    }
}
