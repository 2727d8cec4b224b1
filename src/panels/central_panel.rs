use egui::{Color32, CursorIcon, Sense, Stroke};

use crate::ClassroomApp;
use crate::input::route_event;
use crate::tools::ClassroomTool;

const STAGE_FILL: Color32 = Color32::from_rgb(250, 250, 249);

/// The stage: the content area the drawing overlay sits on
pub fn central_panel(app: &mut ClassroomApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let stage_rect = response.rect;

        painter.rect_filled(stage_rect, 0.0, STAGE_FILL);
        painter.rect_stroke(stage_rect, 0.0, Stroke::new(1.0, Color32::from_gray(200)));

        app.board_mut().set_stage_rect(stage_rect);

        let over_stage = response.contains_pointer();
        let events = app.input_handler_mut().process_input(ctx, over_stage);
        for event in &events {
            route_event(event, app.board_mut());
        }

        if over_stage && app.board().tool() == ClassroomTool::Pen {
            ctx.set_cursor_icon(CursorIcon::Crosshair);
        }

        let board = app.board();
        app.renderer().render(&painter, board.mapper(), &board.primitives());
    });
}
