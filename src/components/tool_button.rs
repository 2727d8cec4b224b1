use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, vec2};

use crate::tools::RailAction;

pub const BUTTON_SIZE: f32 = 40.0;

/// A square icon button on the tool rail
pub struct ToolButton {
    pub action: RailAction,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(action: RailAction, selected: bool) -> Self {
        Self { action, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let (rect, response) =
            ui.allocate_exact_size(vec2(BUTTON_SIZE, BUTTON_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::from_rgb(59, 130, 246)
            } else if response.hovered() {
                Color32::from_gray(55)
            } else {
                Color32::from_gray(35)
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if self.selected { Color32::WHITE } else { Color32::from_gray(210) };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.action.icon(),
                FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter()
                    .rect_stroke(rect, 6.0, Stroke::new(2.0, Color32::from_rgb(147, 197, 253)));
            }
        }

        response.on_hover_text(self.action.label())
    }
}
