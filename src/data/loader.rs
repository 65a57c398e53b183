use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, OnceLock, PoisonError};

use serde::{Deserialize, Deserializer};

use super::error::DataLoadError;
use super::model::{CellValue, Row, Table, RESULT_COLUMNS};
use crate::config;

/// Header names the source must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = RESULT_COLUMNS;

// ---------------------------------------------------------------------------
// Load-once cache
// ---------------------------------------------------------------------------

static GLOBAL: LazyLock<DatasetCache> = LazyLock::new(|| DatasetCache::new(config::DATA_PATH));

/// Reads its source at most once and hands out the same [`Table`] afterwards.
///
/// A failed load leaves the cache empty, so a later call (e.g. a user-driven
/// retry) reads the source again.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    table: OnceLock<Arc<Table>>,
    fill: Mutex<()>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceLock::new(),
            fill: Mutex::new(()),
        }
    }

    /// Process-wide cache bound to [`config::DATA_PATH`].
    pub fn global() -> &'static DatasetCache {
        &GLOBAL
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached table, loading it on first use.
    pub fn get(&self) -> Result<Arc<Table>, DataLoadError> {
        if let Some(table) = self.table.get() {
            log::debug!("Dataset cache hit ({} rows)", table.len());
            return Ok(Arc::clone(table));
        }

        // Only one caller reads the source; the rest wait and re-check.
        let _fill = self.fill.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load_table(&self.path)?);
        log::info!(
            "Loaded {} listings from {}",
            table.len(),
            self.path.display()
        );
        Ok(Arc::clone(self.table.get_or_init(|| table)))
    }
}

// ---------------------------------------------------------------------------
// CSV reading
// ---------------------------------------------------------------------------

/// Read and enrich the listings CSV at `path`, bypassing any cache.
pub fn load_table(path: &Path) -> Result<Table, DataLoadError> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    read_table(reader, path)
}

/// Like [`load_table`] for an in-memory source; `origin` names it in errors.
#[cfg(test)]
fn parse_table<R: io::Read>(source: R, origin: &Path) -> Result<Table, DataLoadError> {
    read_table(reader_builder().from_reader(source), origin)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Short records are kept; their missing trailing cells read as empty.
    builder.trim(csv::Trim::Headers).flexible(true);
    builder
}

fn read_table<R: io::Read>(
    mut reader: csv::Reader<R>,
    origin: &Path,
) -> Result<Table, DataLoadError> {
    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Read {
            path: origin.to_path_buf(),
            source,
        })?
        .clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns {
            path: origin.to_path_buf(),
            missing,
        });
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawListing>() {
        let raw = result.map_err(|source| {
            let line = source.position().map_or(0, |pos| pos.line());
            DataLoadError::Record {
                path: origin.to_path_buf(),
                line,
                source,
            }
        })?;
        rows.push(raw.into_row());
    }

    Ok(Table::from_rows(rows))
}

/// One CSV record before the title is parsed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawListing {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Price", deserialize_with = "cell")]
    price: CellValue,
    #[serde(rename = "Fuel_Type")]
    fuel_type: String,
    #[serde(rename = "Manufactured_Year", deserialize_with = "year")]
    manufactured_year: Option<i64>,
    #[serde(rename = "Imported_Year", deserialize_with = "year")]
    imported_year: Option<i64>,
    #[serde(rename = "Mileage", deserialize_with = "cell")]
    mileage: CellValue,
    #[serde(rename = "Link")]
    link: String,
}

impl RawListing {
    fn into_row(self) -> Row {
        Row::new(
            self.title,
            self.price,
            self.fuel_type,
            self.manufactured_year,
            self.imported_year,
            self.mileage,
            self.link,
        )
    }
}

fn cell<'de, D: Deserializer<'de>>(d: D) -> Result<CellValue, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(CellValue::guess(&raw))
}

fn year<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let raw = String::deserialize(d)?;
    let year = parse_year_cell(&raw);
    if year.is_none() && !raw.trim().is_empty() {
        log::warn!("Treating year cell '{raw}' as missing");
    }
    Ok(year)
}

/// `"2015"` / `"2015.0"` → `Some(2015)`; empty or anything else → `None`.
fn parse_year_cell(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(y) = s.parse::<i64>() {
        return Some(y);
    }
    // Dataframe exports write integer columns with gaps as floats.
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}
