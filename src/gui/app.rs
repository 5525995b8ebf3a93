// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    check::{CheckInput, Outcome, ResultLog},
    config::state::AppState,
    core::net::{HttpTransport, Transport},
};

/// A finished request, posted back from its worker thread.
pub type Completion = (CheckInput, Outcome);

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let transport = HttpTransport::new()?;
    eframe::run_native(
        "Gemini Brand Mention Checker",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default(), Arc::new(transport))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub log: ResultLog,

    // request plumbing: workers send, update() drains
    pub transport: Arc<dyn Transport>,
    pub tx: Sender<Completion>,
    rx: Receiver<Completion>,
    pub pending: usize,

    // inline error under the form (validation or last failed request)
    pub error: Option<String>,

    // export/copy feedback
    pub status: String,

    // output dir text field UX (mapped into ExportOptions on export)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl App {
    pub fn new(state: AppState, transport: Arc<dyn Transport>) -> Self {
        let (tx, rx) = mpsc::channel();
        let out_dir_text = state.options.export.dir().to_string_lossy().into_owned();

        info!("Init: endpoint={}", state.options.endpoint);

        Self {
            state,
            log: ResultLog::new(),
            transport,
            tx,
            rx,
            pending: 0,
            error: None,
            status: s!("Idle"),
            out_dir_text,
            out_dir_dirty: false,
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.pending > 0
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Ingest finished requests in completion order.
    pub fn drain_completions(&mut self) {
        while let Ok((input, outcome)) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            if let Some(msg) = self.log.ingest(&input, outcome) {
                self.error = Some(msg);
            }
        }
    }

    pub fn toggle_expanded(&mut self, index: usize) {
        if let Err(e) = self.log.toggle_expanded(index) {
            error!("Table: {}", e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_completions();

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            crate::gui::components::footer::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Gemini Brand Mention Checker (Demo)");
            ui.add_space(8.0);

            crate::gui::components::form::draw(ui, self);

            if let Some(msg) = &self.error {
                ui.colored_label(egui::Color32::from_rgb(139, 0, 0), msg);
            }

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::results_table::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;
    impl Transport for Echo {
        fn send(&self, _endpoint: &str, input: &CheckInput) -> Outcome {
            Outcome::from_body(200, "OK", &format!(r#"{{"raw_text":"{}"}}"#, input.brand))
        }
    }

    #[test]
    fn drained_in_completion_order() {
        let mut app = App::new(AppState::default(), Arc::new(Echo));
        for brand in ["first", "second"] {
            let input = CheckInput { prompt: s!("p"), brand: s!(brand) };
            let outcome = app.transport.send("unused", &input);
            app.pending += 1;
            app.tx.send((input, outcome)).unwrap();
        }

        app.drain_completions();

        assert_eq!(app.pending, 0);
        let raws: Vec<&str> = app.log.iter().map(|r| r.raw_text()).collect();
        assert_eq!(raws, vec!["second", "first"]);
        assert_eq!(app.error, None);
    }

    #[test]
    fn failed_completion_sets_inline_error() {
        let mut app = App::new(AppState::default(), Arc::new(Echo));
        let input = CheckInput { prompt: s!("p"), brand: s!("b") };
        app.pending = 1;
        app.tx.send((input, Outcome::failed("connection refused"))).unwrap();

        app.drain_completions();

        assert_eq!(app.error.as_deref(), Some("Request failed: connection refused"));
        assert_eq!(app.log.len(), 1);
    }
}
