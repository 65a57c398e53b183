use eframe::egui::Ui;
use egui_plot::{uniform_grid_spacer, Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cars-per-brand chart (bottom panel)
// ---------------------------------------------------------------------------

/// Render one bar per top brand, counted over the whole dataset.
pub fn brand_chart(ui: &mut Ui, state: &AppState) {
    ui.heading("Number of Cars per Brand");

    if state.brand_counts.is_empty() {
        ui.label("No listings to chart.");
        return;
    }

    let labels: Vec<String> = state
        .brand_counts
        .iter()
        .map(|bc| bar_label(&bc.brand).to_string())
        .collect();

    let bars: Vec<Bar> = state
        .brand_counts
        .iter()
        .zip(&labels)
        .zip(&state.bar_colors)
        .enumerate()
        .map(|(i, ((bc, label), color))| {
            Bar::new(i as f64, bc.count as f64)
                .name(label)
                .fill(*color)
                .width(0.7)
        })
        .collect();

    let chart = BarChart::new(bars).name("Cars per Brand");

    Plot::new("brand_chart")
        .x_axis_label("Brand")
        .y_axis_label("Number of Cars")
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| tick_label(&labels, mark.value))
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn bar_label(brand: &str) -> &str {
    if brand.is_empty() {
        "(no brand)"
    } else {
        brand
    }
}

/// Brand name under integral x positions, nothing elsewhere.
fn tick_label(labels: &[String], x: f64) -> String {
    if x < 0.0 || x.fract() != 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}
