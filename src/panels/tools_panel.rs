use egui::{Color32, RichText, Sense, Stroke, vec2};

use crate::ClassroomApp;
use crate::components::ToolButton;
use crate::element::{ShapeKind, parse_hex_color};
use crate::tools::{ClassroomTool, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, PALETTE, RailAction};

const SWATCH_SIZE: f32 = 22.0;

/// Vertical tool rail on the right edge, plus the pen controls while the pen is active
pub fn tools_panel(app: &mut ClassroomApp, ctx: &egui::Context) {
    egui::SidePanel::right("tool_rail")
        .resizable(false)
        .exact_width(56.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                for action in RailAction::RAIL {
                    let selected = match action {
                        RailAction::Select(tool) => app.board().tool() == tool,
                        RailAction::Erase => false,
                    };
                    if ToolButton::new(action, selected).show(ui).clicked() {
                        log::debug!("Rail clicked: {}", action.label());
                        app.board_mut().click_rail(action);
                    }
                    ui.add_space(4.0);
                }
            });
        });

    if app.board().tool() == ClassroomTool::Pen {
        pen_panel(app, ctx);
    }
}

fn pen_panel(app: &mut ClassroomApp, ctx: &egui::Context) {
    egui::SidePanel::right("pen_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Pen");
            ui.separator();

            ui.label("Shape");
            let current_kind = app.board().style().kind();
            egui::Grid::new("shape_grid").num_columns(4).spacing([4.0, 4.0]).show(ui, |ui| {
                for (i, kind) in ShapeKind::PANEL_ORDER.into_iter().enumerate() {
                    let button = ui
                        .selectable_label(
                            kind == current_kind,
                            RichText::new(kind.icon()).size(18.0),
                        )
                        .on_hover_text(kind.name());
                    if button.clicked() {
                        app.board_mut().set_kind(kind);
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
            ui.separator();

            ui.label("Width");
            let mut width = app.board().style().stroke_width();
            let slider =
                egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).step_by(1.0);
            if ui.add(slider).changed() {
                app.board_mut().set_stroke_width(width);
            }
            ui.separator();

            ui.label("Color");
            let current_color = app.board().style().color().to_string();
            egui::Grid::new("palette_grid").num_columns(4).spacing([6.0, 6.0]).show(ui, |ui| {
                for (i, hex) in PALETTE.into_iter().enumerate() {
                    if color_swatch(ui, hex, hex.eq_ignore_ascii_case(&current_color)).clicked() {
                        app.board_mut().set_color(hex);
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
        });
}

fn color_swatch(ui: &mut egui::Ui, hex: &str, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = parse_hex_color(hex).unwrap_or(Color32::TRANSPARENT);
        ui.painter().circle_filled(rect.center(), SWATCH_SIZE / 2.0 - 1.0, fill);

        let ring = if selected {
            Stroke::new(2.0, Color32::from_rgb(59, 130, 246))
        } else if response.hovered() {
            Stroke::new(1.0, Color32::from_gray(160))
        } else {
            Stroke::new(1.0, Color32::from_gray(90))
        };
        ui.painter().circle_stroke(rect.center(), SWATCH_SIZE / 2.0 - 1.0, ring);
    }

    response.on_hover_text(hex)
}
