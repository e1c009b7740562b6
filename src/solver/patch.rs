//! Transdermal patch closed forms
//!
//! A patch cycle has two phases governed by the wear duration `W`:
//!
//! - **Wear phase** `0 <= t <= W`: identical to the single-event solution
//!   with zero residual masses — the depot is the patch reservoir.
//! - **Post-removal phase** `t > W`: the absorption-compartment content and
//!   the observed concentration at `t = W` become the residual masses of a
//!   zero-dose chain evaluation at elapsed time `t - W`. Input stops
//!   instantly; the residual masses keep transferring and decaying, so the
//!   response is continuous at the phase boundary.
//!
//! # Periodic superposition
//!
//! Under repetition every `T`, the wear-phase and post-removal contributions
//! are each periodic with period `T` but anchored at different phase
//! offsets (application at `nT`, removal at `nT + W`). For phase
//! `tau = t mod T`, the cycles still in their wear phase are
//! `n = 0 .. floor((W - tau)/T)` — possibly several when `T < W`
//! (overlapping patches), possibly none when `tau > W`. Their per-rate sums
//! are truncated geometric series whose numerators are differences of two
//! exponentials at different anchors:
//!
//! ```text
//! sum_{n=0}^{N} e^{-k(tau+nT)} = (e^{-k·tau} - e^{-k(tau+(N+1)T)}) / (1 - e^{-kT})
//! ```
//!
//! Both the numerator difference and the `1 - e^{-kT}` denominator are
//! computed in log space through [`logsubexp`] and re-exponentiated, so
//! nearly-equal exponents cannot cancel catastrophically. An empty wear sum
//! (`N = -1`) makes the two anchors coincide and `logsubexp` returns `-inf`
//! — the re-exponentiated term is exactly zero.
//!
//! The post-removal cycles `n > N` form full geometric series anchored at
//! `tau + (N+1)T - W`.

use crate::kinetics::KineticParameters;
use crate::solver::math::{logsubexp, rates_close};
use crate::solver::single_event::{
    absorption_content, concentration as single_dose, concentration_with_residual, ResidualMasses,
};

// =================================================================================================
// Single Cycle
// =================================================================================================

/// Observed concentration `t` after applying one patch
///
/// Wear phase for `0 <= t <= W`, residual-mass decay afterwards, exactly 0
/// before application.
///
/// # Errors
///
/// Returns `Err` when the parameters carry no wear duration (bolus
/// parameters routed to the patch solver).
pub fn concentration(t: f64, dose: f64, params: &KineticParameters) -> Result<f64, String> {
    let wear = wear_duration(params)?;

    if t < 0.0 {
        return Ok(0.0);
    }

    if t <= wear {
        return Ok(single_dose(t, dose, params));
    }

    let residual = removal_masses(wear, dose, params);
    Ok(concentration_with_residual(t - wear, 0.0, params, &residual))
}

/// Compartment content at the removal instant
fn removal_masses(wear: f64, dose: f64, params: &KineticParameters) -> ResidualMasses {
    ResidualMasses {
        absorption: absorption_content(wear, dose, params),
        circulating: single_dose(wear, dose, params),
    }
}

fn wear_duration(params: &KineticParameters) -> Result<f64, String> {
    params
        .wear
        .ok_or_else(|| "Patch evaluation requires parameters with a wear duration".to_string())
}

// =================================================================================================
// Periodic Steady State
// =================================================================================================

/// Steady-state concentration under a new patch every `interval`
///
/// Closed-form infinite superposition of the two-phase cycle response.
/// Supports any positive `interval`, including `interval < W` (several
/// patches worn at once).
///
/// # Errors
///
/// Returns `Err` when the parameters carry no wear duration, or when any two
/// rate constants coincide — the truncated-series coefficients require fully
/// distinct rates and this solver reports that rather than returning an
/// ill-conditioned number.
///
/// # Panics
///
/// Panics when `interval <= 0` (regime-level validation is the caller-facing
/// gate, as for the bolus steady state).
pub fn steady_state(
    t: f64,
    dose: f64,
    interval: f64,
    params: &KineticParameters,
) -> Result<f64, String> {
    let wear = wear_duration(params)?;
    let (k1, k2, k3) = (params.k1, params.k2, params.k3);

    if rates_close(k1, k2) || rates_close(k1, k3) || rates_close(k2, k3) {
        return Err(format!(
            "Periodic patch superposition is not implemented for coincident \
             rate constants (got k1 = {}, k2 = {}, k3 = {})",
            k1, k2, k3
        ));
    }

    assert!(
        interval > 0.0,
        "periodic patch requires a positive interval, got {}",
        interval
    );

    let tau = t.rem_euclid(interval);

    // Index of the last cycle still in its wear phase at this offset;
    // -1 when the newest patch has already been removed (tau > wear).
    let last_worn = ((wear - tau) / interval).floor();
    let first_removed = last_worn + 1.0;

    // ====== Wear-phase contribution ======

    // Truncated geometric series per rate constant, all in log space.
    let wear_series = |k: f64| -> f64 {
        let numerator = logsubexp(-k * tau, -k * (tau + first_removed * interval));
        let denominator = logsubexp(0.0, -k * interval);
        (numerator - denominator).exp()
    };

    let prefactor = dose * params.scale * k1 * k2;
    let wear_part = prefactor
        * (wear_series(k1) / ((k2 - k1) * (k3 - k1))
            + wear_series(k2) / ((k1 - k2) * (k3 - k2))
            + wear_series(k3) / ((k1 - k3) * (k2 - k3)));

    // ====== Post-removal contribution ======

    // Residual masses at removal feed two decaying exponentials; their full
    // geometric series start at the first removed cycle.
    let masses = removal_masses(wear, dose, params);
    let absorption_coefficient = masses.absorption * k2 / (k3 - k2);
    let circulating_coefficient = masses.circulating - absorption_coefficient;

    // Elapsed time since removal of the first removed cycle; non-negative by
    // construction of `first_removed`.
    let offset = tau + first_removed * interval - wear;

    let post_series = |k: f64| -> f64 {
        let denominator = logsubexp(0.0, -k * interval);
        (-k * offset - denominator).exp()
    };

    let post_part =
        absorption_coefficient * post_series(k2) + circulating_coefficient * post_series(k3);

    Ok(wear_part + post_part)
}

// =================================================================================================
// Tests
// =================================================================================================
