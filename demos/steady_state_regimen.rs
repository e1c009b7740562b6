//! Example: Steady-State Regimens — trough and average comparison
//!
//! Compares weekly steady-state levels across the injectable ester models
//! using the analytic trough and mass-balance average, then shows the
//! periodic waveform of a twice-weekly patch regimen.
//!
//! Run with: `cargo run --example steady_state_regimen`

use pk_rs::models::{standard_store, ModelId};
use pk_rs::schedule::{
    regime_average, regime_concentration_at, regime_trough, SteadyStateRegime,
};

fn main() -> Result<(), String> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Steady State — 4 mg every 7 days");
    println!("═══════════════════════════════════════════════════════\n");

    let store = standard_store();

    println!("{:<12} {:>12} {:>12}", "Model", "Trough", "Average");
    println!("{:-<38}", "");

    for id in [
        ModelId::EstradiolValerateIm,
        ModelId::EstradiolEnanthateIm,
        ModelId::EstradiolCypionateIm,
        ModelId::EstradiolBenzoateIm,
        ModelId::EstradiolUndecylateIm,
    ] {
        let regime = SteadyStateRegime::new(4.0, 7.0, id);
        let trough = regime_trough(&regime, store, 1.0)?;
        let average = regime_average(&regime, store, 1.0)?;
        println!("{:<12} {:>10.1} {:>12.1}", id.to_string(), trough, average);
    }

    // ====== Patch waveform ======

    println!("\nPatch tw, 0.1 mg replaced every 3.5 days:");
    let regime = SteadyStateRegime::new(0.1, 3.5, ModelId::PatchTwiceWeekly);
    for i in 0..=7 {
        let t = 3.5 * i as f64 / 7.0;
        let level = regime_concentration_at(&regime, t, store, 1.0)?;
        println!("  day {:>4.1}: {:>7.1} pg/mL", t, level);
    }

    Ok(())
}
