// src/gui/components/form.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let gui = &mut app.state.gui;

    ui.label("Prompt");
    ui.add(
        egui::TextEdit::multiline(&mut gui.prompt)
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .hint_text(r#"Enter a prompt (e.g. "Recommend the best CRM software for enterprise businesses")"#),
    );
    ui.add_space(4.0);

    ui.label("Brand name");
    ui.add(
        egui::TextEdit::singleline(&mut gui.brand)
            .desired_width(f32::INFINITY)
            .hint_text("e.g. Salesforce"),
    );
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        // Further submissions stay allowed while one is in flight
        let label = if app.running() { "Running..." } else { "Run" };
        if ui.button(label).clicked() {
            actions::submit(app, ui.ctx());
        }

        if ui.button("Download to CSV").clicked() {
            actions::export(app);
        }

        if app.running() {
            ui.add(Spinner::new().size(16.0));
            if app.pending > 1 {
                ui.label(format!("{} pending", app.pending));
            }
        }
    });
}
