use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::WINDOW_TITLE;
use crate::data::model::{Row, RESULT_COLUMNS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the result count and the filtered listings.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    ui.heading(WINDOW_TITLE);
    ui.label("Filter cars by brand, car name, and year.");
    ui.add_space(6.0);

    let Some(table) = state.table.as_deref() else {
        load_failed(ui, state);
        return;
    };
    if table.is_empty() {
        ui.label(format!("{} has no listings.", state.cache.path().display()));
        return;
    }

    let rows: Vec<&Row> = state.visible_rows().collect();
    ui.strong(format!("Results Found: {}", rows.len()));
    ui.add_space(4.0);

    if rows.is_empty() {
        ui.label(
            RichText::new("No cars found with selected filters.")
                .color(ui.visuals().warn_fg_color),
        );
        return;
    }

    let link_col = RESULT_COLUMNS.len() - 1;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(300.0).at_least(120.0).clip(true))
        .columns(Column::auto().at_least(70.0), RESULT_COLUMNS.len() - 2)
        .column(Column::remainder().at_least(80.0).clip(true))
        .header(22.0, |mut header| {
            for name in RESULT_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let listing = rows[row.index()];
                for (col, text) in listing.projected().into_iter().enumerate() {
                    row.col(|ui: &mut Ui| {
                        if col == link_col && !text.is_empty() {
                            ui.hyperlink_to("Open listing", &text).on_hover_text(&text);
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });
}

/// Nothing loaded: point at the source and let the user try again.
/// The error itself is shown in the top bar.
fn load_failed(ui: &mut Ui, state: &mut AppState) {
    ui.label(format!("Could not load {}.", state.cache.path().display()));
    if ui.button("Retry").clicked() {
        state.load();
    }
}
