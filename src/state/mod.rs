mod context;
mod persistence;
mod session;

pub use context::BoardContext;
pub use persistence::{BoardSnapshot, SNAPSHOT_VERSION};
pub use session::{DrawingSession, SessionState};
