#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod util;

pub use app::ClassroomApp;
pub use document::DrawingLog;
pub use element::{DrawingElement, Shape, ShapeKind, StrokeStyle};
pub use error::{BoardError, BoardResult};
pub use event::{BoardEvent, EventBus, EventHandler};
pub use geometry::{Primitive, PrimitiveGeometry};
pub use id_generator::ElementId;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::{Renderer, render_pass};
pub use state::{BoardContext, BoardSnapshot, DrawingSession, SessionState};
pub use tools::{ClassroomTool, RailAction, ToolStyle};
