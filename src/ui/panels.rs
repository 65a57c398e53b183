use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::{ALL, WINDOW_TITLE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Disjoint borrows: options are read while the selection is edited.
    let AppState {
        options, selection, ..
    } = &mut *state;
    let mut reset = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Select Brand");
            choice_combo(ui, "brand", &mut selection.brand, options.brands.iter().cloned());
            ui.add_space(8.0);

            ui.strong("Enter Car Name (optional)");
            ui.add(
                egui::TextEdit::singleline(&mut selection.car_name)
                    .hint_text("e.g. Corolla")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.strong("Manufactured Year");
            choice_combo(
                ui,
                "manufactured_year",
                &mut selection.manufactured_year,
                options.manufactured_years.iter().map(i64::to_string),
            );
            ui.add_space(8.0);

            ui.strong("Imported Year");
            choice_combo(
                ui,
                "imported_year",
                &mut selection.imported_year,
                options.imported_years.iter().map(i64::to_string),
            );

            ui.separator();
            reset = ui.button("Reset filters").clicked();
        });

    if reset {
        state.reset_filters();
    } else {
        // Recompute visible rows if any widget changed the selection.
        state.refilter();
    }
}

/// A combo box offering "All" followed by `values`.
fn choice_combo(
    ui: &mut Ui,
    id: &str,
    current: &mut String,
    values: impl Iterator<Item = String>,
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(current, ALL.to_string(), ALL);
            for value in values {
                let label = value.clone();
                ui.selectable_value(current, value, label);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(WINDOW_TITLE);

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} listings loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
