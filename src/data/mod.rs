//! Data layer: listing types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!   updated_file.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read CSV once, run title parser → Table (cached)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Table    │  Vec<Row> with derived Brand / Car_Name
//!   └──────────┘
//!     │      │
//!     ▼      ▼
//!  ┌────────┐ ┌───────────┐
//!  │ filter │ │ aggregate │  selection → row indices / brand → count
//!  └────────┘ └───────────┘
//! ```
//!
//! Nothing in here depends on the UI toolkit.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod title;
