use std::cell::RefCell;

use super::{BoardEvent, EventHandler};

/// A simple event bus for broadcasting board events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers, in subscription order
    pub fn emit(&self, event: BoardEvent) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecentEvents;

    #[test]
    fn test_emit_reaches_every_handler() {
        let bus = EventBus::new();
        let first = RecentEvents::new(4);
        let second = RecentEvents::new(4);
        bus.subscribe(Box::new(first.clone()));
        bus.subscribe(Box::new(second.clone()));

        bus.emit(BoardEvent::LogErased { removed: 2 });

        assert_eq!(bus.handler_count(), 2);
        assert_eq!(first.snapshot(), vec![BoardEvent::LogErased { removed: 2 }]);
        assert_eq!(second.len(), 1);
    }
}
