//! The eframe front-end.
//!
//! # Module Organization
//!
//! - `state` - The [`BoardApp`] struct and startup/persistence helpers
//! - `canvas` - Translating egui input into board events and painting the board
//! - `painter` - The egui implementation of the drawing surface

mod canvas;
mod painter;
mod state;

pub use painter::EguiSurface;
pub use state::{BoardApp, WINDOW_SIZE_KEY};

use crate::block::BlockKind;
use crate::board::Key;
use crate::config::STORAGE_KEY;
use eframe::egui;

impl eframe::App for BoardApp {
    /// Persists the board configuration and window size; the diagram is not saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.board.config().to_json() {
            Ok(json) => storage.set_string(STORAGE_KEY, json),
            Err(err) => log::warn!("failed to serialize board config: {err}"),
        }
        if let Some(size) = self.window_inner_size {
            match serde_json::to_string(&size) {
                Ok(json) => storage.set_string(WINDOW_SIZE_KEY, json),
                Err(err) => log::warn!("failed to serialize window size: {err}"),
            }
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.track_window_size(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl BoardApp {
    /// Restores the stored window size once per session, then records the
    /// current size for the next save.
    fn track_window_size(&mut self, ctx: &egui::Context) {
        if !self.applied_viewport_restore {
            if let Some((w, h)) = self.window_inner_size {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(w, h)));
            }
            self.applied_viewport_restore = true;
        }
        let size = ctx.input(|i| i.screen_rect().size());
        self.window_inner_size = Some((size.x, size.y));
    }

    /// Zoom readout, grid toggle, model counts and a shortcut reminder.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Zoom: {:.0}%", self.board.zoom_level() * 100.0));

            ui.separator();

            let mut show_grid = self.board.config().show_grid;
            if ui.checkbox(&mut show_grid, "Grid").changed() {
                self.board.set_show_grid(show_grid);
            }

            ui.separator();

            ui.label(format!(
                "Blocks: {}  Edges: {}",
                self.board.blocks().len(),
                self.board.edges().len()
            ));

            ui.separator();

            ui.weak(shortcut_hint());
        });
    }
}

fn shortcut_hint() -> String {
    let shapes: Vec<String> = Key::SHAPE_SHORTCUTS
        .iter()
        .map(|(letter, kind)| {
            let name = match kind {
                BlockKind::Rectangle => "block",
                BlockKind::Circle => "circle",
                BlockKind::TextBox => "text",
            };
            format!("Ctrl+{}: {name}", letter.to_ascii_uppercase())
        })
        .collect();
    format!(
        "{}  |  Space+drag: pan  |  Wheel: zoom  |  Click two blocks: connect  |  Delete: remove",
        shapes.join("  ")
    )
}
