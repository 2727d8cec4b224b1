use serde::{Deserialize, Serialize};

use crate::element::DrawingElement;

/// Committed elements in drawing order; the last element is drawn on top.
///
/// Append-only while the classroom session runs, emptied only by "erase all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawingLog {
    elements: Vec<DrawingElement>,
}

impl DrawingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, element: DrawingElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[DrawingElement] {
        &self.elements
    }

    pub fn last(&self) -> Option<&DrawingElement> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drop every element, returning how many were removed
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.elements.len();
        self.elements.clear();
        removed
    }
}
