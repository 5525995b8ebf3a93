// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_dir_dirty = true;
            debug!("UI: out_dir_text changed (dirty=true) → {}", app.out_dir_text);
        }

        if ui.button("Copy").on_hover_text("Copy CSV to clipboard").clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.label(&app.status);
    });
}
