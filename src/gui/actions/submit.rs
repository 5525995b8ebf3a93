// src/gui/actions/submit.rs
use std::{sync::Arc, thread};

use eframe::egui;
use tracing::info;

use crate::{check::validate, gui::app::App};

/// Validate on the UI thread, then run the request on a worker. The result
/// comes back through `app.tx` and is ingested by `App::drain_completions`.
/// Earlier requests may still be pending; nothing is cancelled or merged.
pub fn submit(app: &mut App, ctx: &egui::Context) {
    app.error = None;

    let input = match validate(&app.state.gui.prompt, &app.state.gui.brand) {
        Ok(input) => input,
        Err(e) => {
            app.error = Some(e.to_string());
            return;
        }
    };

    let endpoint = app.state.options.endpoint.clone();
    let transport = Arc::clone(&app.transport);
    let tx = app.tx.clone();
    let ctx2 = ctx.clone();

    app.pending += 1;
    info!("Check: Begin endpoint={} brand={} pending={}", endpoint, input.brand, app.pending);

    thread::spawn(move || {
        let outcome = transport.send(&endpoint, &input);
        // Receiver only goes away when the window closes
        let _ = tx.send((input, outcome));
        ctx2.request_repaint();
    });
}
