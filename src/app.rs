use egui::Vec2;

use crate::event::{LoggingHandler, RecentEvents};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::{self, Renderer};
use crate::state::{BoardContext, BoardSnapshot};

const RECENT_EVENT_CAPACITY: usize = 12;

/// The classroom view hosting the drawing board
#[derive(Debug)]
pub struct ClassroomApp {
    board: BoardContext,
    input_handler: InputHandler,
    renderer: Renderer,
    recent_events: RecentEvents,
    show_debug: bool,
    // Text area for pasting a snapshot to restore
    snapshot_input: String,
    snapshot_error: Option<String>,
}

impl Default for ClassroomApp {
    fn default() -> Self {
        let board = BoardContext::new();
        let recent_events = RecentEvents::new(RECENT_EVENT_CAPACITY);
        board.event_bus().subscribe(Box::new(LoggingHandler));
        board.event_bus().subscribe(Box::new(recent_events.clone()));

        Self {
            board,
            input_handler: InputHandler::new(),
            renderer: Renderer::new(),
            recent_events,
            show_debug: true,
            snapshot_input: String::new(),
            snapshot_error: None,
        }
    }
}

impl ClassroomApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Starting classroom board");
        Self::default()
    }

    pub fn board(&self) -> &BoardContext {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardContext {
        &mut self.board
    }

    pub fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input_handler
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn recent_events(&self) -> &RecentEvents {
        &self.recent_events
    }

    /// SVG document of everything currently drawn, sized to the stage
    pub fn export_svg(&self) -> String {
        let size = self
            .board
            .mapper()
            .stage_rect()
            .map_or(Vec2::ZERO, |rect| rect.size());
        renderer::to_svg(&self.board.primitives(), size)
    }

    fn restore_from_input(&mut self) {
        let restored = BoardSnapshot::from_json(&self.snapshot_input)
            .and_then(|snapshot| snapshot.restore(&mut self.board));
        match restored {
            Ok(()) => self.snapshot_error = None,
            Err(err) => {
                log::warn!("Could not restore board: {err}");
                self.snapshot_error = Some(err.to_string());
            }
        }
    }

    fn debug_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_debug;
        let mut restore_clicked = false;

        egui::Window::new("Board")
            .open(&mut open)
            .default_pos(egui::pos2(16.0, 16.0))
            .show(ctx, |ui| {
                let session = self.board.session();
                ui.label(format!("Tool: {}", self.board.tool().name()));
                ui.label(format!("Session: {}", session.state().name()));
                ui.label(format!("Committed elements: {}", session.log().len()));
                ui.label(format!(
                    "Pen: {} {}px {}",
                    self.board.style().color(),
                    self.board.style().stroke_width(),
                    self.board.style().kind().name()
                ));
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Copy SVG").clicked() {
                        log::info!("Exporting {} primitives as SVG", self.board.primitives().len());
                        ctx.copy_text(self.export_svg());
                    }
                    if ui.button("Copy JSON").clicked() {
                        match BoardSnapshot::capture(&self.board).to_json() {
                            Ok(json) => {
                                log::info!("Exported board snapshot ({} bytes)", json.len());
                                ctx.copy_text(json);
                            }
                            Err(err) => log::error!("Could not export board: {err}"),
                        }
                    }
                });

                ui.collapsing("Restore", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.snapshot_input)
                            .hint_text("Paste a board snapshot")
                            .desired_rows(4),
                    );
                    restore_clicked = ui.button("Restore").clicked();
                    if let Some(err) = &self.snapshot_error {
                        ui.colored_label(egui::Color32::RED, err);
                    }
                });

                ui.collapsing("Recent events", |ui| {
                    for event in self.recent_events.snapshot().iter().rev() {
                        ui.monospace(event.summary());
                    }
                });
            });

        self.show_debug = open;
        if restore_clicked {
            self.restore_from_input();
        }
    }
}

impl eframe::App for ClassroomApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Classroom");
                ui.separator();
                ui.toggle_value(&mut self.show_debug, "Board");
            });
        });

        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.debug_window(ctx);
    }
}
