//! The board context owned by the classroom view.
//!
//! `BoardContext` ties together the drawing session, the pen style, the
//! selected rail tool and the stage mapper. The view feeds it viewport pointer
//! positions and rail clicks; it maps them to stage coordinates, drives the
//! session and broadcasts what changed on its event bus.
//!
//! # Example
//!
//! ```rust
//! use classroom_board::BoardContext;
//! use classroom_board::tools::{ClassroomTool, RailAction};
//! use egui::{pos2, vec2, Rect};
//!
//! let mut board = BoardContext::new();
//! board.set_stage_rect(Rect::from_min_size(pos2(100.0, 100.0), vec2(640.0, 480.0)));
//! board.click_rail(RailAction::Select(ClassroomTool::Pen));
//!
//! board.pointer_down(pos2(110.0, 110.0));
//! board.pointer_move(pos2(150.0, 120.0));
//! board.pointer_up();
//!
//! assert_eq!(board.session().log().len(), 1);
//! ```

use egui::{Pos2, Rect};

use super::session::DrawingSession;
use crate::document::DrawingLog;
use crate::element::{ShapeKind, parse_hex_color};
use crate::event::{BoardEvent, EventBus};
use crate::geometry::Primitive;
use crate::id_generator::ElementId;
use crate::input::StageMapper;
use crate::renderer;
use crate::tools::{ClassroomTool, RailAction, ToolStyle};

#[derive(Debug, Default)]
pub struct BoardContext {
    session: DrawingSession,
    style: ToolStyle,
    tool: ClassroomTool,
    mapper: StageMapper,
    event_bus: EventBus,
}

impl BoardContext {
    /// A fresh board: empty log, default pen style, pointer tool selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn tool(&self) -> ClassroomTool {
        self.tool
    }

    pub fn mapper(&self) -> &StageMapper {
        &self.mapper
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn set_stage_rect(&mut self, rect: Rect) {
        self.mapper.set_stage_rect(rect);
    }

    /// Open a new element if the pen is selected
    pub fn pointer_down(&mut self, viewport: Pos2) -> Option<ElementId> {
        let pos = self.mapper.to_stage(viewport);
        let id = self
            .session
            .on_pointer_down(pos, self.tool.engages_drawing(), &self.style)?;
        self.event_bus.emit(BoardEvent::ElementStarted {
            id,
            kind: self.style.kind(),
        });
        Some(id)
    }

    pub fn pointer_move(&mut self, viewport: Pos2) -> bool {
        let pos = self.mapper.to_stage(viewport);
        self.session.on_pointer_move(pos)
    }

    pub fn pointer_up(&mut self) -> Option<ElementId> {
        let id = self.session.on_pointer_up()?;
        self.emit_committed(id);
        Some(id)
    }

    pub fn pointer_leave(&mut self) -> Option<ElementId> {
        let id = self.session.on_pointer_leave()?;
        self.emit_committed(id);
        Some(id)
    }

    fn emit_committed(&self, id: ElementId) {
        let log = self.session.log();
        if let Some(element) = log.last() {
            self.event_bus.emit(BoardEvent::ElementCommitted {
                id,
                kind: element.kind(),
                log_len: log.len(),
            });
        }
    }

    /// Handle a click on a tool rail button
    pub fn click_rail(&mut self, action: RailAction) {
        match action {
            RailAction::Erase => {
                self.erase_all();
            }
            RailAction::Select(clicked) => {
                let old = self.tool;
                self.tool = clicked.toggled_from(old);
                self.event_bus.emit(BoardEvent::ToolChanged { old, new: self.tool });
            }
        }
    }

    /// Clear the committed log; style, tool and any in-progress element stay
    pub fn erase_all(&mut self) -> usize {
        let removed = self.session.erase_all();
        self.event_bus.emit(BoardEvent::LogErased { removed });
        removed
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.style.set_color(color);
        if let Err(err) = parse_hex_color(self.style.color()) {
            log::warn!("{err}, it will be painted in the default pen color");
        }
        self.emit_style();
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.set_stroke_width(width);
        self.emit_style();
    }

    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.style.set_kind(kind);
        self.emit_style();
    }

    fn emit_style(&self) {
        self.event_bus.emit(BoardEvent::StyleChanged {
            style: self.style.clone(),
        });
    }

    /// Vector primitives of the committed log, then the in-progress element on top
    pub fn primitives(&self) -> Vec<Primitive> {
        renderer::render_pass(self.session.log(), self.session.in_progress())
    }

    /// Swap in a restored log and pen style
    pub(crate) fn restore(&mut self, log: DrawingLog, style: ToolStyle) {
        let elements = log.len();
        self.session.replace_log(log);
        self.style = style;
        self.event_bus.emit(BoardEvent::SnapshotRestored { elements });
    }
}
