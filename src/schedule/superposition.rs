//! Multi-event superposition
//!
//! The chain model is linear, so an arbitrary schedule's response is the
//! plain sum of time-shifted single-event (or patch-cycle) responses. Each
//! event dispatches to its model's delivery route; the unit conversion
//! factor scales the summed concentration linearly and is threaded through
//! explicitly — there is no process-wide unit state.

use rand::Rng;

use crate::models::ModelStore;
use crate::sampling::ensemble;
use crate::schedule::events::{Schedule, SteadyStateRegime};

// =================================================================================================
// Canonical Superposition
// =================================================================================================

/// Summed concentration of a schedule at time `t`, canonical parameters
///
/// # Arguments
///
/// * `schedule` - The dose schedule (absolute or interval encoding)
/// * `t` - Evaluation time \[days\], same origin as the absolute times
/// * `store` - Model parameter store
/// * `unit_factor` - Linear dose-to-concentration unit conversion
///
/// # Behaviour
///
/// - Interval-encoded schedules convert to absolute first.
/// - Invalid events (non-positive amount, non-finite time) are skipped.
/// - Events later than `t` contribute exactly 0 (causality).
///
/// # Errors
///
/// Propagates route errors (e.g. patch parameters without a wear duration).
pub fn concentration_at(
    schedule: &Schedule,
    t: f64,
    store: &ModelStore,
    unit_factor: f64,
) -> Result<f64, String> {
    let absolute = schedule.absolute();
    let mut total = 0.0;

    for event in absolute.valid_events() {
        let route = event.model.route();
        let params = store.parameters(event.model);
        total += route.concentration(t - event.time, event.amount, params)?;
    }

    Ok(total * unit_factor)
}

/// Summed concentration with one posterior draw per event
///
/// Every event's parameters are replaced by an independent uniform draw
/// from its model's posterior ensemble. Repeated calls with fresh draws
/// build the scatter cloud that approximates the predictive interval.
pub fn concentration_at_sampled<R: Rng + ?Sized>(
    schedule: &Schedule,
    t: f64,
    store: &ModelStore,
    unit_factor: f64,
    rng: &mut R,
) -> Result<f64, String> {
    let absolute = schedule.absolute();
    let mut total = 0.0;

    for event in absolute.valid_events() {
        let route = event.model.route();
        let params = ensemble::draw(store, event.model, rng)?;
        total += route.concentration(t - event.time, event.amount, params)?;
    }

    Ok(total * unit_factor)
}

// =================================================================================================
// Steady-State Regimens
// =================================================================================================

/// Steady-state concentration of a regimen at time `t`
///
/// # Errors
///
/// Returns `Err` when the regimen fails validation or the periodic closed
/// form is unavailable for the model's parameters.
pub fn regime_concentration_at(
    regime: &SteadyStateRegime,
    t: f64,
    store: &ModelStore,
    unit_factor: f64,
) -> Result<f64, String> {
    regime.validate()?;
    let route = regime.model.route();
    let params = store.parameters(regime.model);
    let value = route.steady_state(t, regime.dose, regime.interval, params)?;
    Ok(value * unit_factor)
}

/// Trough concentration of a regimen (steady-state value at phase zero)
pub fn regime_trough(
    regime: &SteadyStateRegime,
    store: &ModelStore,
    unit_factor: f64,
) -> Result<f64, String> {
    regime_concentration_at(regime, 0.0, store, unit_factor)
}

/// Mass-balance average concentration of a regimen
///
/// # Errors
///
/// Returns `Err` when the regimen fails validation or its model's route has
/// no closed-form average (patch models).
pub fn regime_average(
    regime: &SteadyStateRegime,
    store: &ModelStore,
    unit_factor: f64,
) -> Result<f64, String> {
    regime.validate()?;
    let route = regime.model.route();
    let params = store.parameters(regime.model);
    route
        .steady_state_average(regime.dose, regime.interval, params)
        .map(|value| value * unit_factor)
        .ok_or_else(|| {
            format!(
                "No steady-state average is defined for the {} route",
                route.name()
            )
        })
}

// =================================================================================================
// Tests
// =================================================================================================
