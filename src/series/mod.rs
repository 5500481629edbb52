//! Series Extraction
//!
//! Turns an embedded JSON payload into the aligned label/value pairs a chart
//! consumes.
//!
//! # Example
//!
//! ```rust
//! use hospital_dashboard::series::{extract_series, FieldSelector};
//!
//! let payload = r#"[{"mes":"Jan","monto":1000},{"mes":"Feb","monto":1500}]"#;
//! let series = extract_series(payload, &FieldSelector::revenue()).unwrap();
//!
//! assert_eq!(series.labels(), ["Jan", "Feb"]);
//! assert_eq!(series.values(), [1000.0, 1500.0]);
//! ```

mod extractor;
mod types;

pub use extractor::{extract_records, extract_series, FieldSelector};
pub use types::{ChartRecord, PerformancePoint, RevenuePoint, Series};
