use std::fmt;

use super::title::parse_title;

// ---------------------------------------------------------------------------
// CellValue – a "numeric or text" cell (Price, Mileage)
// ---------------------------------------------------------------------------

/// A loosely typed cell as scraped listings carry them: sometimes a clean
/// number, sometimes `"Rs 45 lacs"` or `"54,000 km"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// Numbers when the whole trimmed text parses as a float, verbatim text otherwise.
    pub fn guess(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Number(v),
            _ => CellValue::Text(s.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one car listing
// ---------------------------------------------------------------------------

/// Columns handed to the UI for each result row, in display order.
pub const RESULT_COLUMNS: [&str; 7] = [
    "Title",
    "Price",
    "Fuel_Type",
    "Manufactured_Year",
    "Imported_Year",
    "Mileage",
    "Link",
];

/// A single listing with its derived `brand` / `car_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub title: String,
    pub price: CellValue,
    pub fuel_type: String,
    pub manufactured_year: Option<i64>,
    pub imported_year: Option<i64>,
    pub mileage: CellValue,
    pub link: String,
    /// First word of the title.
    pub brand: String,
    /// Rest of the title up to the first comma; may be empty.
    pub car_name: String,
}

impl Row {
    /// Build a row, deriving brand and car name from `title`.
    pub fn new(
        title: String,
        price: CellValue,
        fuel_type: String,
        manufactured_year: Option<i64>,
        imported_year: Option<i64>,
        mileage: CellValue,
        link: String,
    ) -> Self {
        let parsed = parse_title(&title);
        Row {
            title,
            price,
            fuel_type,
            manufactured_year,
            imported_year,
            mileage,
            link,
            brand: parsed.brand,
            car_name: parsed.car_name,
        }
    }

    /// Display text for [`RESULT_COLUMNS`], same order.
    pub fn projected(&self) -> [String; 7] {
        let year = |y: Option<i64>| y.map(|y| y.to_string()).unwrap_or_default();
        [
            self.title.clone(),
            self.price.to_string(),
            self.fuel_type.clone(),
            year(self.manufactured_year),
            year(self.imported_year),
            self.mileage.to_string(),
            self.link.clone(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Table – the complete enriched dataset
// ---------------------------------------------------------------------------

/// Ordered, immutable collection of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Table { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
