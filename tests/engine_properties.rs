//! Property tests for the closed-form engine
//!
//! These tests verify the engine's analytical guarantees: causality,
//! degenerate-limit agreement, periodicity, phase continuity, superposition
//! linearity and the stabilized log-space subtraction.

use pk_rs::kinetics::KineticParameters;
use pk_rs::models::{standard_store, ModelId};
use pk_rs::schedule::{concentration_at, DoseEvent, Schedule};
use pk_rs::solver::{logsubexp, patch, single_event, steady_state};

mod common;
use common::assert_close;

// =================================================================================================
// Causality
// =================================================================================================

#[test]
fn test_response_is_zero_before_the_event() {
    let store = standard_store();

    for id in ModelId::ALL {
        let params = store.parameters(id);
        for t in [-1e-9, -0.5, -30.0] {
            let value = id.route().concentration(t, 4.0, params).unwrap();
            assert_eq!(value, 0.0, "model {} responded before the event", id);
        }
    }
}

#[test]
fn test_schedule_respects_event_times() {
    let store = standard_store();
    let schedule = Schedule::new(vec![DoseEvent::new(
        5.0,
        4.0,
        ModelId::EstradiolValerateIm,
    )]);

    assert_eq!(concentration_at(&schedule, 4.999, store, 1.0).unwrap(), 0.0);
    assert!(concentration_at(&schedule, 5.5, store, 1.0).unwrap() > 0.0);
}

// =================================================================================================
// Degenerate-Limit Agreement
// =================================================================================================

#[test]
fn test_general_formula_converges_to_pair_limit() {
    // Evaluating the general three-distinct-rate formula at k1 = k2 + eps
    // must converge to the k1 = k2 closed form as eps shrinks.
    let limit = KineticParameters::new(95.0, 1.55, 1.55, 0.21);

    for t in [0.5, 2.0, 10.0] {
        let exact = single_event::concentration(t, 4.0, &limit);
        let mut errors = Vec::new();

        for eps in [1e-2, 1e-3, 1e-4] {
            let perturbed = KineticParameters::new(95.0, 1.55 + eps, 1.55, 0.21);
            let general = single_event::concentration(t, 4.0, &perturbed);
            errors.push((general - exact).abs());
        }

        // Errors shrink roughly linearly with eps
        assert!(errors[1] < errors[0]);
        assert!(errors[2] < errors[1]);
        assert!(errors[2] < 1e-3 * exact.max(1e-6), "t = {}: {:?}", t, errors);
    }
}

#[test]
fn test_every_coincidence_pattern_is_finite() {
    let k = 0.7;
    let patterns = [
        KineticParameters::new(95.0, k, k, k),
        KineticParameters::new(95.0, k, k, 2.0 * k),
        KineticParameters::new(95.0, k, 2.0 * k, k),
        KineticParameters::new(95.0, 2.0 * k, k, k),
        KineticParameters::new(95.0, k, 2.0 * k, 3.0 * k),
    ];

    for params in patterns {
        for t in [0.0, 0.1, 1.0, 10.0, 200.0] {
            let value = single_event::concentration(t, 4.0, &params);
            assert!(
                value.is_finite() && value >= 0.0,
                "non-finite or negative response for {:?} at t = {}",
                params,
                t
            );
        }
    }
}

// =================================================================================================
// Steady State
// =================================================================================================

#[test]
fn test_steady_state_periodicity_across_models() {
    let store = standard_store();

    for id in [
        ModelId::EstradiolValerateIm,
        ModelId::EstradiolEnanthateIm,
        ModelId::EstradiolUndecylateCaSubq,
        ModelId::PatchTwiceWeekly,
    ] {
        let params = store.parameters(id);
        let interval = 7.0;

        for t in [0.0, 1.3, 6.4] {
            let a = id.route().steady_state(t, 4.0, interval, params).unwrap();
            let b = id
                .route()
                .steady_state(t + interval, 4.0, interval, params)
                .unwrap();
            assert_close(a, b, 1e-9, &format!("periodicity of {}", id));
        }
    }
}

#[test]
fn test_trough_is_minimum_for_decaying_chains() {
    let store = standard_store();
    let params = store.parameters(ModelId::EstradiolEnanthateIm);
    let trough = steady_state::trough(4.0, 7.0, params);

    for i in 0..500 {
        let t = 7.0 * i as f64 / 500.0;
        let value = steady_state::concentration(t, 4.0, 7.0, params);
        assert!(
            value >= trough - 1e-9 * trough.abs(),
            "steady state dipped below the trough at t = {}",
            t
        );
    }
}

// =================================================================================================
// Patch Continuity
// =================================================================================================

#[test]
fn test_patch_is_continuous_at_removal() {
    let store = standard_store();

    for id in [ModelId::PatchTwiceWeekly, ModelId::PatchOnceWeekly] {
        let params = store.parameters(id);
        let wear = params.wear.unwrap();

        let at_removal = patch::concentration(wear, 1.0, params).unwrap();
        let just_after = patch::concentration(wear + 1e-8, 1.0, params).unwrap();
        assert_close(
            just_after,
            at_removal,
            1e-6,
            &format!("phase boundary of {}", id),
        );
    }
}

// =================================================================================================
// Superposition Linearity
// =================================================================================================

#[test]
fn test_two_events_sum_like_one_plus_one() {
    let store = standard_store();
    let id = ModelId::EstradiolCypionateIm;

    let first = Schedule::new(vec![DoseEvent::new(0.0, 4.0, id)]);
    let second = Schedule::new(vec![DoseEvent::new(2.0, 6.0, id)]);
    let both = Schedule::new(vec![
        DoseEvent::new(0.0, 4.0, id),
        DoseEvent::new(2.0, 6.0, id),
    ]);

    for t in [1.0, 3.0, 14.0] {
        let separate = concentration_at(&first, t, store, 1.0).unwrap()
            + concentration_at(&second, t, store, 1.0).unwrap();
        let joint = concentration_at(&both, t, store, 1.0).unwrap();
        assert_close(joint, separate, 1e-12, "superposition linearity");
    }
}

#[test]
fn test_mixed_mechanism_schedule() {
    // Injections and patches superpose through the same dispatch
    let store = standard_store();
    let schedule = Schedule::new(vec![
        DoseEvent::new(0.0, 4.0, ModelId::EstradiolValerateIm),
        DoseEvent::new(1.0, 0.1, ModelId::PatchTwiceWeekly),
    ]);

    let value = concentration_at(&schedule, 3.0, store, 1.0).unwrap();
    assert!(value.is_finite());
    assert!(value > 0.0);
}

// =================================================================================================
// Interval Conversion
// =================================================================================================

#[test]
fn test_interval_gaps_resolve_to_running_sum() {
    let id = ModelId::EstradiolValerateIm;
    let schedule = Schedule::interval_encoded(vec![
        DoseEvent::new(2.0, 4.0, id),
        DoseEvent::new(3.0, 4.0, id),
        DoseEvent::new(5.0, 4.0, id),
    ]);

    let times: Vec<f64> = schedule
        .absolute()
        .events()
        .iter()
        .map(|event| event.time)
        .collect();
    assert_eq!(times, vec![2.0, 5.0, 10.0]);
}

// =================================================================================================
// Stabilized Subtraction
// =================================================================================================

#[test]
fn test_logsubexp_against_naive_evaluation() {
    // Far-apart exponents: matches the naive computation
    let naive = (1.0f64.exp() - 0.25f64.exp()).ln();
    assert_close(logsubexp(1.0, 0.25), naive, 1e-12, "moderate gap");

    // x = 0, y = -50: naive evaluation returns ln(1) = 0 exactly because
    // e^-50 vanishes in the subtraction; the stabilized form keeps the
    // -e^-50 residue.
    let stabilized = logsubexp(0.0, -50.0);
    assert!(stabilized < 0.0);
    assert!(stabilized.abs() < 1e-20);
}

#[test]
fn test_logsubexp_equal_inputs_is_negative_infinity() {
    assert_eq!(logsubexp(-3.25, -3.25), f64::NEG_INFINITY);
}

#[test]
#[should_panic(expected = "logsubexp requires y <= x")]
fn test_logsubexp_fails_loudly_on_inverted_order() {
    logsubexp(-1.0, 0.0);
}
