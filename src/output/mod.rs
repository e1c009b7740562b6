//! Output module for sampled prediction curves
//!
//! This module provides tools to output curve data in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── curves.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Design Philosophy
//!
//! The engine core returns [`CurveSeries`](crate::sampling::CurveSeries)
//! point sets; everything here is a collaborator convenience around those
//! values. Both sub-modules are read-only consumers — nothing in `output`
//! feeds back into the solvers.
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use pk_rs::output::visualization::plot_concentration_curve;
//!
//! plot_concentration_curve(&curve, "prediction.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use pk_rs::output::export::export_curve_csv;
//!
//! export_curve_csv(&curve, "prediction.csv", None)?;
//! ```

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_curve_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_concentration_curve, plot_curve_with_cloud, PlotConfig};
