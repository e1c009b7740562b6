//! End-to-end regimen scenarios
//!
//! These tests exercise the full path a UI collaborator takes: build a
//! schedule or regimen, evaluate scalars, sample curves and clouds.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pk_rs::models::{standard_store, ModelId};
use pk_rs::sampling::{schedule_curve, uncertainty_cloud};
use pk_rs::schedule::{
    concentration_at, regime_average, regime_concentration_at, regime_trough, DoseEvent, Schedule,
    SteadyStateRegime,
};

mod common;
use common::assert_close;

// =================================================================================================
// Single-Injection Scenario
// =================================================================================================

#[test]
fn test_ev_im_single_injection_scenario() {
    // Model "EV im", canonical (95.0, 1.55, 17.2, 0.21), 4 mg at t = 0
    let store = standard_store();
    let params = store.parameters(ModelId::EstradiolValerateIm);
    assert_eq!(
        (params.scale, params.k1, params.k2, params.k3),
        (95.0, 1.55, 17.2, 0.21)
    );

    let schedule = Schedule::new(vec![DoseEvent::new(
        0.0,
        4.0,
        ModelId::EstradiolValerateIm,
    )]);

    // Concentration at t = 0 is 0
    assert_eq!(concentration_at(&schedule, 0.0, store, 1.0).unwrap(), 0.0);

    // Positive and finite for all t > 0
    for i in 1..=300 {
        let t = i as f64 * 0.2;
        let value = concentration_at(&schedule, t, store, 1.0).unwrap();
        assert!(value > 0.0, "non-positive concentration at t = {}", t);
        assert!(value.is_finite());
    }

    // Tends to 0 as t grows
    let late = concentration_at(&schedule, 500.0, store, 1.0).unwrap();
    assert!(late < 1e-6);
}

// =================================================================================================
// Steady-State Scenario
// =================================================================================================

#[test]
fn test_een_im_weekly_steady_state_scenario() {
    // 4 mg EEn im every 7 days
    let store = standard_store();
    let regime = SteadyStateRegime::new(4.0, 7.0, ModelId::EstradiolEnanthateIm);

    // Trough equals direct evaluation at t = 0
    let trough = regime_trough(&regime, store, 1.0).unwrap();
    let at_zero = regime_concentration_at(&regime, 0.0, store, 1.0).unwrap();
    assert_eq!(trough, at_zero);

    // Average equals dose·d/(k3·7)
    let params = store.parameters(ModelId::EstradiolEnanthateIm);
    let expected_average = 4.0 * params.scale / (params.k3 * 7.0);
    assert_close(
        regime_average(&regime, store, 1.0).unwrap(),
        expected_average,
        1e-12,
        "mass-balance average",
    );

    // The waveform stays above the trough and below a few times the average
    for i in 0..100 {
        let t = 7.0 * i as f64 / 100.0;
        let value = regime_concentration_at(&regime, t, store, 1.0).unwrap();
        assert!(value >= trough - 1e-9 * trough);
        assert!(value < 10.0 * expected_average);
    }
}

#[test]
fn test_patch_steady_state_regimen() {
    let store = standard_store();
    let regime = SteadyStateRegime::new(0.1, 3.5, ModelId::PatchTwiceWeekly);

    let trough = regime_trough(&regime, store, 1.0).unwrap();
    assert!(trough > 0.0);

    // Patch regimens expose no mass-balance average
    assert!(regime_average(&regime, store, 1.0).is_err());
}

// =================================================================================================
// Unit Conversion
// =================================================================================================

#[test]
fn test_unit_factor_is_linear_everywhere() {
    let store = standard_store();
    let schedule = Schedule::new(vec![DoseEvent::new(
        0.0,
        4.0,
        ModelId::EstradiolValerateIm,
    )]);
    let regime = SteadyStateRegime::new(4.0, 7.0, ModelId::EstradiolEnanthateIm);

    let factor = 3.6712;
    let base = concentration_at(&schedule, 2.0, store, 1.0).unwrap();
    let scaled = concentration_at(&schedule, 2.0, store, factor).unwrap();
    assert_close(scaled, factor * base, 1e-12, "schedule unit factor");

    let base_trough = regime_trough(&regime, store, 1.0).unwrap();
    let scaled_trough = regime_trough(&regime, store, factor).unwrap();
    assert_close(scaled_trough, factor * base_trough, 1e-12, "regime unit factor");
}

// =================================================================================================
// Curves and Clouds
// =================================================================================================

#[test]
fn test_multi_dose_curve_generation() {
    let store = standard_store();
    let id = ModelId::EstradiolValerateIm;
    let schedule = Schedule::interval_encoded(vec![
        DoseEvent::new(0.0, 4.0, id),
        DoseEvent::new(7.0, 4.0, id),
        DoseEvent::new(7.0, 4.0, id),
    ]);

    let curve = schedule_curve(&schedule, store, 0.0, 28.0, 281, 1.0).unwrap();
    assert_eq!(curve.len(), 281);

    // Each injection lifts the curve shortly after its absolute time
    for dose_day in [0.0, 7.0, 14.0] {
        let before = curve
            .iter()
            .filter(|(t, _)| *t <= dose_day)
            .last()
            .map(|(_, v)| v)
            .unwrap_or(0.0);
        let after = curve
            .iter()
            .find(|(t, _)| *t >= dose_day + 0.5)
            .map(|(_, v)| v)
            .unwrap();
        assert!(
            after > before,
            "no rise after the dose at day {}",
            dose_day
        );
    }
}

#[test]
fn test_uncertainty_cloud_brackets_the_canonical_curve() {
    let store = standard_store();
    let schedule = Schedule::new(vec![DoseEvent::new(
        0.0,
        4.0,
        ModelId::EstradiolValerateIm,
    )]);
    let mut rng = StdRng::seed_from_u64(2026);

    let cloud = uncertainty_cloud(&schedule, store, 1.0, 20.0, 2000, 1.0, &mut rng).unwrap();
    assert_eq!(cloud.len(), 2000);

    // Cloud values scatter on both sides of the canonical curve somewhere
    let mut above = 0usize;
    let mut below = 0usize;
    for (t, value) in cloud.iter() {
        let canonical = concentration_at(&schedule, t, store, 1.0).unwrap();
        if value > canonical {
            above += 1;
        } else if value < canonical {
            below += 1;
        }
    }
    assert!(above > 100, "cloud never exceeded the canonical curve");
    assert!(below > 100, "cloud never dipped below the canonical curve");
}

#[test]
fn test_unknown_identifier_is_a_caller_error() {
    assert!(ModelId::parse("EV sublingual").is_err());
    assert!(ModelId::parse("patch daily").is_err());
}
