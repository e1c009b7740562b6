//! Export module for sampled curves.
//!
//! # Architecture
//!
//! Each export format is an independent implementation in its own
//! sub-module. Adding a new format means adding a file, without modifying
//! existing code.
//!
//! # Available formats
//!
//! | Format  | Module    |
//! |---------|-----------|
//! | CSV     | [`csv`]   |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use pk_rs::output::export::{export_curve_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_schedule("EV im", schedule.len()));
//! export_curve_csv(&series, "curve.csv", Some(&config))?;
//! ```

pub mod csv;

// Re-export the most commonly used items at the module level so users can
// write `use pk_rs::output::export::{export_curve_csv, CsvConfig}`.
pub use csv::{export_curve_csv, CsvConfig, CsvMetadata};
