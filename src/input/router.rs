use super::InputEvent;
use crate::state::BoardContext;

/// Routes a stage event into the board. Positions are still viewport
/// coordinates here; the board maps them onto the stage.
pub fn route_event(event: &InputEvent, board: &mut BoardContext) {
    match *event {
        InputEvent::PointerDown { location } => {
            board.pointer_down(location.position);
        }
        InputEvent::PointerMove { location } => {
            board.pointer_move(location.position);
        }
        InputEvent::PointerUp { .. } => {
            board.pointer_up();
        }
        InputEvent::PointerLeave { .. } => {
            board.pointer_leave();
        }
    }
}
