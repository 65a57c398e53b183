use std::sync::Arc;

use eframe::egui::Color32;

use crate::color::brand_colors;
use crate::config::TOP_BRANDS;
use crate::data::aggregate::{brand_counts, BrandCount};
use crate::data::filter::{filtered_indices, FilterOptions, FilterSelection};
use crate::data::loader::DatasetCache;
use crate::data::model::{Row, Table};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the listings come from; retries go back to the same cache.
    pub cache: &'static DatasetCache,

    /// Enriched listings (None until the cache delivers them).
    pub table: Option<Arc<Table>>,

    /// Values offered by the filter widgets.
    pub options: FilterOptions,

    /// Current form values.
    pub selection: FilterSelection,

    /// Indices of rows passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Top brands over the whole table, for the chart.
    pub brand_counts: Vec<BrandCount>,

    /// One colour per entry of `brand_counts`.
    pub bar_colors: Vec<Color32>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Selection the cached `visible_indices` were computed for.
    applied: FilterSelection,
}

impl AppState {
    pub fn new(cache: &'static DatasetCache) -> Self {
        Self {
            cache,
            table: None,
            options: FilterOptions::default(),
            selection: FilterSelection::default(),
            visible_indices: Vec::new(),
            brand_counts: Vec::new(),
            bar_colors: Vec::new(),
            status_message: None,
            applied: FilterSelection::default(),
        }
    }

    /// Ask the cache for the table; on failure keep the error for display.
    pub fn load(&mut self) {
        match self.cache.get() {
            Ok(table) => self.set_table(table),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a loaded table, derive options and the chart, reset filters.
    pub fn set_table(&mut self, table: Arc<Table>) {
        self.options = FilterOptions::from_table(&table);
        self.brand_counts = brand_counts(&table, TOP_BRANDS);
        self.bar_colors = brand_colors(&self.brand_counts);
        self.selection = FilterSelection::default();
        self.applied = self.selection.clone();
        self.visible_indices = (0..table.len()).collect();
        self.table = Some(table);
        self.status_message = None;
    }

    /// Recompute `visible_indices` if the selection changed since last time.
    pub fn refilter(&mut self) {
        if self.selection == self.applied {
            return;
        }
        if let Some(table) = &self.table {
            self.visible_indices = filtered_indices(table, &self.selection);
            log::debug!(
                "{:?} → {} of {} listings",
                self.selection,
                self.visible_indices.len(),
                table.len()
            );
        }
        self.applied = self.selection.clone();
    }

    /// Restore every filter to "All".
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::default();
        self.refilter();
    }

    /// Rows passing the current selection, in table order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        let table = self.table.as_deref();
        self.visible_indices
            .iter()
            .filter_map(move |&i| table.and_then(|t| t.get(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn table() -> Arc<Table> {
        let row = |title: &str, year: Option<i64>| {
            Row::new(
                title.to_string(),
                CellValue::Empty,
                "Petrol".to_string(),
                year,
                None,
                CellValue::Empty,
                String::new(),
            )
        };
        Arc::new(Table::from_rows(vec![
            row("Toyota Corolla GLi, 2015", Some(2015)),
            row("Honda Civic", Some(2018)),
            row("Toyota Vitz", None),
        ]))
    }

    #[test]
    fn set_table_shows_everything() {
        let mut state = AppState::new(DatasetCache::global());
        state.set_table(table());
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.options.brands, vec!["Toyota", "Honda"]);
        assert_eq!(state.brand_counts[0].brand, "Toyota");
        assert_eq!(state.brand_counts[0].count, 2);
    }

    #[test]
    fn refilter_applies_selection_but_not_chart() {
        let mut state = AppState::new(DatasetCache::global());
        state.set_table(table());
        let chart = state.brand_counts.clone();

        state.selection.brand = "Toyota".to_string();
        state.selection.manufactured_year = "2015".to_string();
        state.refilter();

        assert_eq!(state.visible_indices, vec![0]);
        let titles: Vec<&str> = state.visible_rows().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Toyota Corolla GLi, 2015"]);
        assert_eq!(state.brand_counts, chart);

        state.reset_filters();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn load_failure_keeps_message() {
        let dir = tempfile::tempdir().unwrap();
        let cache: &'static DatasetCache =
            Box::leak(Box::new(DatasetCache::new(dir.path().join("missing.csv"))));
        let mut state = AppState::new(cache);
        state.load();
        assert!(state.table.is_none());
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("missing.csv")));
    }

    #[test]
    fn retry_goes_back_to_the_same_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");
        let cache: &'static DatasetCache = Box::leak(Box::new(DatasetCache::new(&path)));
        let mut state = AppState::new(cache);

        state.load();
        assert!(state.table.is_none());

        std::fs::write(
            &path,
            "Title,Price,Fuel_Type,Manufactured_Year,Imported_Year,Mileage,Link\n\
             Kia Picanto,1,Petrol,2021,,1,l\n",
        )
        .unwrap();
        state.load();

        assert!(std::ptr::eq(state.cache, cache));
        assert_eq!(state.table.as_ref().map(|t| t.len()), Some(1));
        assert!(state.status_message.is_none());
        assert_eq!(state.bar_colors.len(), state.brand_counts.len());
    }
}
