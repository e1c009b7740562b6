//! Visualization of sampled curves
//!
//! PNG/SVG rendering of concentration curves and uncertainty clouds using
//! plotters. The backend is selected by the output file extension.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pk_rs::output::visualization::{plot_curve_with_cloud, PlotConfig};
//!
//! let config = PlotConfig::concentration("EV im, 4 mg weekly");
//! plot_curve_with_cloud(&curve, &cloud, "prediction.png", Some(&config))?;
//! ```

mod config;
mod curves;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use curves::{plot_concentration_curve, plot_curve_with_cloud};
