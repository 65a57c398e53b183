// ---------------------------------------------------------------------------
// Compile-time configuration
// ---------------------------------------------------------------------------

/// Location of the listings CSV, relative to the working directory.
pub const DATA_PATH: &str = "updated_file.csv";

/// Sentinel option meaning "do not filter on this field".
pub const ALL: &str = "All";

/// Number of brands shown in the chart.
pub const TOP_BRANDS: usize = 15;

pub const WINDOW_TITLE: &str = "Simple Car Filter App";
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [720.0, 480.0];
