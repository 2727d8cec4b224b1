use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

// Single static counter for all drawing elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Identifier of a drawing element, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(usize);

impl ElementId {
    pub fn value(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

pub fn generate_id() -> ElementId {
    ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst))
}

/// Moves the counter past `id` so restored elements never collide with new ones
pub(crate) fn reserve_through(id: ElementId) -> BoardResult<()> {
    let next = id.0.checked_add(1).ok_or(BoardError::IdSpaceExhausted(id))?;
    NEXT_ELEMENT_ID.fetch_max(next, Ordering::SeqCst);
    Ok(())
}
