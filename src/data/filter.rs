use std::collections::HashSet;

use super::error::FilterInputError;
use super::model::{Row, Table};
use crate::config::ALL;

// ---------------------------------------------------------------------------
// Filter selection: what the form currently says
// ---------------------------------------------------------------------------

/// User-chosen filter values for one render cycle.
///
/// `"All"` (or an empty string) switches a field's predicate off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub brand: String,
    pub car_name: String,
    pub manufactured_year: String,
    pub imported_year: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            brand: ALL.to_string(),
            car_name: String::new(),
            manufactured_year: ALL.to_string(),
            imported_year: ALL.to_string(),
        }
    }
}

fn is_inactive(value: &str) -> bool {
    value.is_empty() || value == ALL
}

/// Parse a year selection. `Ok(None)` means the predicate is off.
pub fn parse_year_selection(
    field: &'static str,
    value: &str,
) -> Result<Option<i64>, FilterInputError> {
    if is_inactive(value) {
        return Ok(None);
    }
    value
        .trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| FilterInputError {
            field,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Compiled predicates
// ---------------------------------------------------------------------------

/// A selection resolved once per filtering pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    pub brand: Option<String>,
    /// Already lower-cased.
    pub car_name: Option<String>,
    pub manufactured_year: Option<i64>,
    pub imported_year: Option<i64>,
}

impl ActiveFilters {
    /// Resolve a selection. Unparsable years are logged and ignored.
    pub fn from_selection(selection: &FilterSelection) -> Self {
        let year = |field, value: &str| {
            parse_year_selection(field, value).unwrap_or_else(|e| {
                log::warn!("Ignoring filter: {e}");
                None
            })
        };

        Self {
            brand: (!is_inactive(&selection.brand)).then(|| selection.brand.clone()),
            car_name: (!selection.car_name.is_empty()).then(|| selection.car_name.to_lowercase()),
            manufactured_year: year("Manufactured_Year", &selection.manufactured_year),
            imported_year: year("Imported_Year", &selection.imported_year),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a row passes every active predicate.
    pub fn matches(&self, row: &Row) -> bool {
        if let Some(brand) = &self.brand {
            if row.brand != *brand {
                return false;
            }
        }
        if let Some(needle) = &self.car_name {
            if row.car_name.is_empty() || !row.car_name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(year) = self.manufactured_year {
            if row.manufactured_year != Some(year) {
                return false;
            }
        }
        if let Some(year) = self.imported_year {
            if row.imported_year != Some(year) {
                return false;
            }
        }
        true
    }
}

/// Return indices of rows that pass all active filters, in table order.
pub fn filtered_indices(table: &Table, selection: &FilterSelection) -> Vec<usize> {
    let filters = ActiveFilters::from_selection(selection);
    if filters.is_empty() {
        return (0..table.len()).collect();
    }
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| filters.matches(row))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Options offered by the form
// ---------------------------------------------------------------------------

/// Distinct values observed in the table, in first-seen order.
///
/// Empty brands are left out: an empty brand selection means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub manufactured_years: Vec<i64>,
    pub imported_years: Vec<i64>,
}

impl FilterOptions {
    pub fn from_table(table: &Table) -> Self {
        let rows = table.rows();
        Self {
            brands: first_seen(
                rows.iter()
                    .filter(|r| !r.brand.is_empty())
                    .map(|r| r.brand.clone()),
            ),
            manufactured_years: first_seen(rows.iter().filter_map(|r| r.manufactured_year)),
            imported_years: first_seen(rows.iter().filter_map(|r| r.imported_year)),
        }
    }
}

fn first_seen<T, I>(values: I) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn row(title: &str, manufactured: Option<i64>, imported: Option<i64>) -> Row {
        Row::new(
            title.to_string(),
            CellValue::Empty,
            "Petrol".to_string(),
            manufactured,
            imported,
            CellValue::Empty,
            String::new(),
        )
    }

    fn sample() -> Table {
        Table::from_rows(vec![
            row("Toyota Corolla GLi, 2015", Some(2015), None),
            row("Honda Civic Oriel", Some(2018), Some(2019)),
            row("Toyota", None, Some(2019)),
            row("Toyota Corolla Altis", Some(2018), Some(2019)),
            row("Suzuki Alto VXR", Some(2015), None),
        ])
    }

    fn select(brand: &str, car_name: &str, manufactured: &str, imported: &str) -> FilterSelection {
        FilterSelection {
            brand: brand.to_string(),
            car_name: car_name.to_string(),
            manufactured_year: manufactured.to_string(),
            imported_year: imported.to_string(),
        }
    }

    #[test]
    fn inactive_selection_returns_everything_in_order() {
        let table = sample();
        assert_eq!(
            filtered_indices(&table, &FilterSelection::default()),
            vec![0, 1, 2, 3, 4]
        );
        assert_eq!(filtered_indices(&table, &select("", "", "", "")), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn brand_is_exact_and_case_sensitive() {
        let table = sample();
        let hits = filtered_indices(&table, &select("Toyota", "", ALL, ALL));
        assert_eq!(hits, vec![0, 2, 3]);
        assert!(hits.iter().all(|&i| table.rows()[i].brand == "Toyota"));
        assert_eq!(
            hits.len(),
            table.rows().iter().filter(|r| r.brand == "Toyota").count()
        );
        assert!(filtered_indices(&table, &select("toyota", "", ALL, ALL)).is_empty());
    }

    #[test]
    fn car_name_is_case_insensitive_substring() {
        let table = sample();
        assert_eq!(filtered_indices(&table, &select(ALL, "corolla", ALL, ALL)), vec![0, 3]);
        assert_eq!(filtered_indices(&table, &select(ALL, "GLI", ALL, ALL)), vec![0]);
    }

    #[test]
    fn empty_car_name_never_matches_active_name_filter() {
        let table = sample();
        // row 2 ("Toyota") has no car name
        assert!(!filtered_indices(&table, &select(ALL, "t", ALL, ALL)).contains(&2));
    }

    #[test]
    fn car_name_is_literal_text() {
        let table = Table::from_rows(vec![row("Mercedes C.200", None, None), row("Mercedes C5200", None, None)]);
        assert_eq!(filtered_indices(&table, &select(ALL, "c.2", ALL, ALL)), vec![0]);
    }

    #[test]
    fn year_filters_skip_missing_years() {
        let table = sample();
        assert_eq!(filtered_indices(&table, &select(ALL, "", "2015", ALL)), vec![0, 4]);
        assert_eq!(filtered_indices(&table, &select(ALL, "", "2018", ALL)), vec![1, 3]);
        assert_eq!(filtered_indices(&table, &select(ALL, "", ALL, "2019")), vec![1, 2, 3]);
        // row 2 has no manufactured year
        assert!(filtered_indices(&table, &select(ALL, "", "2019", ALL)).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let table = sample();
        assert_eq!(
            filtered_indices(&table, &select("Toyota", "corolla", "2018", "2019")),
            vec![3]
        );
        assert!(filtered_indices(&table, &select("Honda", "corolla", ALL, ALL)).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_non_destructive() {
        let table = sample();
        let before = table.clone();
        let sel = select("Toyota", "", ALL, "2019");
        let once = filtered_indices(&table, &sel);
        let twice = filtered_indices(&table, &sel);
        assert_eq!(once, twice);
        assert_eq!(table, before);

        // filtering the filtered subset again changes nothing
        let subset = Table::from_rows(once.iter().map(|&i| table.rows()[i].clone()).collect());
        assert_eq!(filtered_indices(&subset, &sel).len(), once.len());
    }

    #[test]
    fn unparsable_year_is_treated_as_inactive() {
        let table = sample();
        assert_eq!(filtered_indices(&table, &select(ALL, "", "twenty", ALL)).len(), table.len());
        assert_eq!(
            parse_year_selection("Manufactured_Year", "twenty"),
            Err(FilterInputError {
                field: "Manufactured_Year",
                value: "twenty".to_string(),
            })
        );
        assert_eq!(parse_year_selection("Imported_Year", " 2019 "), Ok(Some(2019)));
        assert_eq!(parse_year_selection("Imported_Year", ALL), Ok(None));
    }

    #[test]
    fn options_are_distinct_in_first_seen_order() {
        let options = FilterOptions::from_table(&sample());
        assert_eq!(options.brands, vec!["Toyota", "Honda", "Suzuki"]);
        assert_eq!(options.manufactured_years, vec![2015, 2018]);
        assert_eq!(options.imported_years, vec![2019]);

        let untitled = Table::from_rows(vec![row("", None, None), row("Kia Rio", None, None)]);
        assert_eq!(FilterOptions::from_table(&untitled).brands, vec!["Kia"]);
    }
}
