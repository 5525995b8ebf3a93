// src/gui/components/results_table.rs
//
// Results table: newest first. Long raw text is collapsed with a
// Show more / Show less toggle per row. Purely a view; the only write
// back into App is the toggle.

use eframe::egui::{self, Align, FontId, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{core::text, gui::app::App};

const HEADERS: [&str; 5] = ["Prompt", "Brand", "Mentioned", "Position", "Raw Response"];
const FIXED_WIDTHS: [f32; 4] = [180.0, 110.0, 80.0, 70.0];
const RAW_FONT_SIZE: f32 = 12.0;
const CELL_PAD: f32 = 8.0;
const TOGGLE_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Results");

    let body_font = egui::TextStyle::Body.resolve(ui.style());
    let raw_font = FontId::monospace(RAW_FONT_SIZE);
    let spacing = ui.spacing().item_spacing.x;
    let raw_w = (ui.available_width() - FIXED_WIDTHS.iter().sum::<f32>() - spacing * 5.0).max(200.0);

    // Row heights from the text the cells will show (heterogeneous rows)
    let heights: Vec<f32> = ui.fonts(|f| {
        let body_row = f.row_height(&body_font);
        let body_glyph = f.glyph_width(&body_font, 'M');
        let raw_row = f.row_height(&raw_font);
        let raw_glyph = f.glyph_width(&raw_font, 'M');

        app.log
            .iter()
            .map(|r| {
                let shown = text::display_text(r.raw_text(), r.expanded());
                let mut raw_h = wrapped_lines(&shown, raw_w, raw_glyph) as f32 * raw_row;
                if text::is_long(r.raw_text()) { raw_h += TOGGLE_H; }
                let prompt_h = wrapped_lines(r.prompt(), FIXED_WIDTHS[0], body_glyph) as f32 * body_row;
                raw_h.max(prompt_h).max(body_row) + CELL_PAD
            })
            .collect()
    });

    let mut toggled: Option<usize> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Min))
        .min_scrolled_height(0.0);
    for w in FIXED_WIDTHS {
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }
    table = table.column(Column::remainder().at_least(200.0).clip(true));

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.label(RichText::new(h).strong()); });
            }
        })
        .body(|mut body| {
            if app.log.is_empty() {
                body.row(28.0, |mut row| {
                    row.col(|ui| { ui.label("No results yet. Run a check above."); });
                    for _ in 1..HEADERS.len() { row.col(|_| {}); }
                });
                return;
            }

            body.heterogeneous_rows(heights.into_iter(), |mut row| {
                let ix = row.index();
                let Some(r) = app.log.get(ix) else { return };

                for cell in [r.prompt(), r.brand(), r.mentioned(), r.position()] {
                    row.col(|ui| { ui.add(egui::Label::new(cell).wrap()); });
                }

                row.col(|ui| {
                    ui.vertical(|ui| {
                        let shown = text::display_text(r.raw_text(), r.expanded());
                        ui.add(egui::Label::new(
                            RichText::new(shown).monospace().size(RAW_FONT_SIZE)
                        ).wrap());

                        if text::is_long(r.raw_text()) {
                            let label = if r.expanded() { "Show less" } else { "Show more" };
                            if ui.small_button(label).clicked() {
                                toggled = Some(ix);
                            }
                        }
                    });
                });
            });
        });

    if let Some(ix) = toggled {
        app.toggle_expanded(ix);
    }
}

/// Estimated line count after wrapping to `width`.
fn wrapped_lines(s: &str, width: f32, glyph_w: f32) -> usize {
    let per_line = ((width / glyph_w.max(1.0)).floor() as usize).max(1);
    s.split('\n')
        .map(|l| l.chars().count().div_ceil(per_line).max(1))
        .sum()
}
