//! Concentration curve plotting
//!
//! Renders sampled concentration curves and uncertainty clouds to PNG or
//! SVG (backend selected by the output file extension).
//!
//! # Available functions
//!
//! - [`plot_concentration_curve`] — mean curve alone
//! - [`plot_curve_with_cloud`]    — mean curve overlaid on a posterior
//!   scatter cloud
//!
//! # Usage
//!
//! ```rust,ignore
//! use pk_rs::output::visualization::{plot_concentration_curve, plot_curve_with_cloud};
//!
//! let curve = schedule_curve(&schedule, store, 0.0, 60.0, 601, 1.0)?;
//! plot_concentration_curve(&curve, "curve.png", None)?;
//!
//! let cloud = uncertainty_cloud(&schedule, store, 0.0, 60.0, 2000, 1.0, &mut rng)?;
//! plot_curve_with_cloud(&curve, &cloud, "curve_cloud.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::sampling::CurveSeries;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a sampled concentration curve
///
/// # Arguments
///
/// * `curve`       — Sampled mean curve
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the curve is empty or the backend cannot write to
/// `output_path`.
pub fn plot_concentration_curve(
    curve: &CurveSeries,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    plot_curve_with_cloud_inner(curve, None, output_path, config)
}

/// Plot a mean curve overlaid on an uncertainty cloud
///
/// The cloud points are drawn first (small markers), the mean curve on top.
///
/// # Errors
///
/// Returns `Err` when the curve is empty or the backend cannot write to
/// `output_path`. An empty cloud is allowed and simply draws nothing.
pub fn plot_curve_with_cloud(
    curve: &CurveSeries,
    cloud: &CurveSeries,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    plot_curve_with_cloud_inner(curve, Some(cloud), output_path, config)
}

// =================================================================================================
// Implementation
// =================================================================================================

fn plot_curve_with_cloud_inner(
    curve: &CurveSeries,
    cloud: Option<&CurveSeries>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if curve.is_empty() {
        return Err("Empty curve series".into());
    }

    let default_config = PlotConfig::concentration(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Plot ranges cover curve and cloud together
    let mut max_time = curve.times().max();
    let mut min_time = curve.times().min();
    let mut max_value = curve.values().max();
    if let Some(cloud) = cloud {
        if !cloud.is_empty() {
            max_time = max_time.max(cloud.times().max());
            min_time = min_time.min(cloud.times().min());
            max_value = max_value.max(cloud.values().max());
        }
    }
    let max_value = max_value.max(1e-10);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_impl(backend, curve, cloud, config, min_time, max_time, max_value)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_impl(backend, curve, cloud, config, min_time, max_time, max_value)
        }
    }
}

fn draw_impl<DB>(
    backend: DB,
    curve: &CurveSeries,
    cloud: Option<&CurveSeries>,
    config: &PlotConfig,
    min_time: f64,
    max_time: f64,
    max_value: f64,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(min_time..max_time, 0.0..max_value * 1.05)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    // Cloud first so the mean curve stays visible on top
    if let Some(cloud) = cloud {
        chart.draw_series(
            cloud
                .iter()
                .map(|(t, v)| {
                    Circle::new((t, v), config.marker_size as i32, config.cloud_color.filled())
                }),
        )?;
    }

    chart.draw_series(LineSeries::new(
        curve.iter(),
        config.line_color.stroke_width(config.line_width),
    ))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
