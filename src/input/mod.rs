use egui::{Context, Pos2};

mod mapper;
mod router;

pub use mapper::StageMapper;
pub use router::route_event;

/// Where a pointer event happened, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    pub position: Pos2,
    /// Whether the stage was under the pointer
    pub is_in_stage: bool,
}

/// Pointer events on the stage, in the order the stage would receive them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
    /// The pointer left the stage (or the window)
    PointerLeave { last_known_location: InputLocation },
}

/// The primary-button pointer state of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub hover_pos: Option<Pos2>,
    /// The stage is the topmost surface under the pointer
    pub over_stage: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerFrame {
    /// Read the pointer state of the current egui frame
    pub fn from_egui(ctx: &Context, over_stage: bool) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            over_stage,
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Turns per-frame pointer state into stage events
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pointer_in_stage: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw egui input and generate stage events
    pub fn process_input(&mut self, ctx: &Context, over_stage: bool) -> Vec<InputEvent> {
        self.translate(PointerFrame::from_egui(ctx, over_stage))
    }

    /// Events for one frame: move, down, up, then leave
    pub fn translate(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside = frame.over_stage && frame.hover_pos.is_some();

        if let Some(pos) = frame.hover_pos.filter(|_| inside) {
            let location = InputLocation {
                position: pos,
                is_in_stage: true,
            };

            if Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove { location });
            }
            if frame.primary_pressed {
                events.push(InputEvent::PointerDown { location });
            }
            if frame.primary_released {
                events.push(InputEvent::PointerUp { location });
            }
        }

        if self.pointer_in_stage && !inside {
            let position = frame.hover_pos.or(self.last_pointer_pos).unwrap_or(Pos2::ZERO);
            events.push(InputEvent::PointerLeave {
                last_known_location: InputLocation {
                    position,
                    is_in_stage: false,
                },
            });
        }

        self.last_pointer_pos = frame.hover_pos;
        self.pointer_in_stage = inside;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn over(pos: Pos2) -> PointerFrame {
        PointerFrame {
            hover_pos: Some(pos),
            over_stage: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_press_inside_emits_move_then_down() {
        let mut handler = InputHandler::new();
        let events = handler.translate(PointerFrame {
            primary_pressed: true,
            ..over(pos2(5.0, 5.0))
        });
        assert!(matches!(events[0], InputEvent::PointerMove { .. }));
        assert!(matches!(
            events[1],
            InputEvent::PointerDown { location } if location.position == pos2(5.0, 5.0)
        ));
    }

    #[test]
    fn test_still_pointer_emits_nothing() {
        let mut handler = InputHandler::new();
        handler.translate(over(pos2(5.0, 5.0)));
        assert!(handler.translate(over(pos2(5.0, 5.0))).is_empty());
    }

    #[test]
    fn test_leaving_stage_emits_leave_once() {
        let mut handler = InputHandler::new();
        handler.translate(over(pos2(5.0, 5.0)));

        let outside = PointerFrame {
            hover_pos: Some(pos2(900.0, 5.0)),
            over_stage: false,
            ..Default::default()
        };
        let events = handler.translate(outside);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            InputEvent::PointerLeave { last_known_location } if !last_known_location.is_in_stage
        ));
        assert!(handler.translate(outside).is_empty());
    }

    #[test]
    fn test_pointer_gone_from_window_is_a_leave() {
        let mut handler = InputHandler::new();
        handler.translate(over(pos2(5.0, 5.0)));
        let events = handler.translate(PointerFrame::default());
        assert!(matches!(
            events.as_slice(),
            [InputEvent::PointerLeave { last_known_location }]
                if last_known_location.position == pos2(5.0, 5.0)
        ));
    }

    #[test]
    fn test_release_outside_stage_is_not_an_up() {
        let mut handler = InputHandler::new();
        let events = handler.translate(PointerFrame {
            hover_pos: Some(pos2(900.0, 5.0)),
            over_stage: false,
            primary_released: true,
            ..Default::default()
        });
        assert!(events.is_empty());
    }
}
