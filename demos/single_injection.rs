//! Example: Single Injection — curve and uncertainty cloud
//!
//! Predicts the concentration trace of one 4 mg estradiol valerate
//! intramuscular injection, renders the mean curve over an uncertainty
//! cloud, and exports the curve as CSV.
//!
//! **Outputs**:
//! - `ev_im_prediction.png` — mean curve + posterior scatter
//! - `ev_im_prediction.csv` — sampled curve data
//!
//! Run with: `cargo run --example single_injection`

use rand::rngs::StdRng;
use rand::SeedableRng;

use pk_rs::models::{standard_store, ModelId};
use pk_rs::output::export::{export_curve_csv, CsvConfig, CsvMetadata};
use pk_rs::output::visualization::{plot_curve_with_cloud, PlotConfig};
use pk_rs::sampling::{schedule_curve, uncertainty_cloud};
use pk_rs::schedule::{DoseEvent, Schedule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Single Injection — EV im, 4 mg");
    println!("═══════════════════════════════════════════════════════\n");

    let store = standard_store();
    let model = ModelId::parse("EV im")?;

    // ====== Schedule ======

    let schedule = Schedule::new(vec![DoseEvent::new(0.0, 4.0, model)]);

    // ====== Mean curve and posterior cloud ======

    let curve = schedule_curve(&schedule, store, 0.0, 21.0, 421, 1.0)?;

    let mut rng = StdRng::seed_from_u64(8);
    let cloud = uncertainty_cloud(&schedule, store, 0.0, 21.0, 2500, 1.0, &mut rng)?;

    let peak = curve
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    println!("Peak: {:.1} pg/mL around day {:.2}", peak.1, peak.0);
    println!(
        "Day 7 level: {:.1} pg/mL\n",
        curve.iter().find(|(t, _)| *t >= 7.0).unwrap().1
    );

    // ====== Render ======

    let config = PlotConfig::concentration("EV im, 4 mg single injection");
    plot_curve_with_cloud(&curve, &cloud, "ev_im_prediction.png", Some(&config))?;
    println!("Wrote ev_im_prediction.png");

    // ====== Export ======

    let metadata = CsvMetadata::from_schedule(model.as_str(), schedule.len());
    let csv_config = CsvConfig::default().with_metadata(metadata);
    export_curve_csv(&curve, "ev_im_prediction.csv", Some(&csv_config))?;
    println!("Wrote ev_im_prediction.csv");

    Ok(())
}
