//! Periodic steady-state closed forms for bolus models
//!
//! Infinite superposition of the single-event response repeated every `T`
//! time units, evaluated without materializing shifted copies: every
//! exponential term `e^{-k·t}` of the single-event solution becomes
//! `e^{-k·(t mod T)} / (1 - e^{-k·T})` (geometric series), and the
//! polynomial-weighted terms of the degenerate branches use the matching
//! series identities (see [`crate::solver::kernel`]).
//!
//! `trough` is the waveform value at phase zero — the minimum of the period
//! for chains that decay monotonically after the trough. `average` is the
//! mass-balance mean `dose·d/(k3·T)`, independent of absorption kinetics.

use crate::kinetics::KineticParameters;
use crate::solver::kernel::Periodic;
use crate::solver::single_event::{chain_response, ResidualMasses};

// =================================================================================================
// Steady-State Evaluation
// =================================================================================================

/// Steady-state concentration at time `t` under repetition every `interval`
///
/// Defined for every real `t` — the waveform is periodic, so `t` is reduced
/// modulo `interval` (Euclidean remainder).
///
/// # Panics
///
/// Panics when `interval <= 0`; caller-facing interval validation belongs to
/// the regime layer (see [`crate::schedule::SteadyStateRegime::validate`]).
pub fn concentration(t: f64, dose: f64, interval: f64, params: &KineticParameters) -> f64 {
    chain_response(
        dose,
        params,
        &Periodic::new(t, interval),
        &ResidualMasses::NONE,
    )
}

/// Trough concentration: the steady-state value at phase zero
pub fn trough(dose: f64, interval: f64, params: &KineticParameters) -> f64 {
    concentration(0.0, dose, interval, params)
}

/// Mass-balance steady-state mean concentration
///
/// `dose·d / (k3·interval)` — the time average of the periodic waveform,
/// independent of the absorption rates k1 and k2. Only meaningful for bolus
/// models; patch routes report no average (see
/// [`crate::kinetics::DeliveryRoute::steady_state_average`]).
pub fn average(dose: f64, interval: f64, params: &KineticParameters) -> f64 {
    dose * params.scale / (params.k3 * interval)
}

// =================================================================================================
// Tests
// =================================================================================================
