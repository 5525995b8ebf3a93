// src/gui/components/footer.rs

use eframe::egui::{self, Color32, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Frontend calls:").color(Color32::GRAY).size(13.0));
        ui.code(&app.state.options.endpoint);
    });
}
