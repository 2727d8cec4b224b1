mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::BoardEvent;
pub use handlers::{LoggingHandler, RecentEvents};

/// Receives every event emitted on an [`EventBus`].
///
/// Handlers run while the bus holds its handler list, so they must not emit
/// or subscribe on the same bus.
pub trait EventHandler {
    fn handle_event(&mut self, event: &BoardEvent);
}
