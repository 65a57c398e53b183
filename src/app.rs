use eframe::egui;

use crate::data::loader::DatasetCache;
use crate::state::AppState;
use crate::ui::{panels, plot, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarListingsApp {
    pub state: AppState,
}

impl CarListingsApp {
    /// Build the app and pull the listings out of `cache`.
    pub fn new(cache: &'static DatasetCache) -> Self {
        let mut state = AppState::new(cache);
        state.load();
        Self { state }
    }
}

impl eframe::App for CarListingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: cars per brand ----
        egui::TopBottomPanel::bottom("brand_chart")
            .default_height(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::brand_chart(ui, &self.state);
            });

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::results_table(ui, &mut self.state);
        });
    }
}
