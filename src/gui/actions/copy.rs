// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, info};

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(txt) = csv::export_string(&app.log) else {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    info!("Copy: rows={}", app.log.len());
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
