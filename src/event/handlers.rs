use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{BoardEvent, EventHandler};

/// Forwards board events to the `log` facade
#[derive(Debug, Default)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &BoardEvent) {
        match event {
            BoardEvent::LogErased { .. } | BoardEvent::SnapshotRestored { .. } => {
                log::info!("board: {}", event.summary());
            }
            _ => log::debug!("board: {}", event.summary()),
        }
    }
}

/// Keeps the latest events for the debug window. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct RecentEvents {
    capacity: usize,
    events: Rc<RefCell<VecDeque<BoardEvent>>>,
}

impl RecentEvents {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            events: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<BoardEvent> {
        self.events.borrow().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventHandler for RecentEvents {
    fn handle_event(&mut self, event: &BoardEvent) {
        let mut events = self.events.borrow_mut();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_events_drops_oldest() {
        let mut recent = RecentEvents::new(2);
        for removed in 1..=3 {
            recent.handle_event(&BoardEvent::LogErased { removed });
        }
        assert_eq!(
            recent.snapshot(),
            vec![
                BoardEvent::LogErased { removed: 2 },
                BoardEvent::LogErased { removed: 3 }
            ]
        );
    }
}
