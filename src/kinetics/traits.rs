//! Delivery route trait
//!
//! This module defines the core API every delivery model implements:
//! - `DeliveryRoute`: the shared evaluation capability
//!
//! # Responsibility
//!
//! A route selects the closed-form equations for one administration
//! mechanism (bolus injection, transdermal patch). It does NOT own the
//! numerics — those live in [`crate::solver`] — and it does NOT own the
//! parameters — those live in the model store. The route is the seam that
//! lets multi-event superposition dispatch per event without knowing which
//! mechanism it is summing.

use crate::kinetics::KineticParameters;

// =================================================================================================
// Delivery Route Trait
// =================================================================================================

/// Trait for delivery routes
///
/// # Responsibility
///
/// Evaluates the observed-compartment concentration for one administration,
/// either as a single event or under periodic steady-state repetition.
///
/// # Mandatory Point
///
/// All delivery mechanisms MUST implement this trait; the superposition
/// layer only ever talks to `dyn DeliveryRoute`.
pub trait DeliveryRoute: Send + Sync {
    /// Observed concentration `elapsed` time units after one administration
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Time since the administration \[days\]; negative elapsed
    ///   time yields exactly 0 (causality)
    /// * `dose` - Administered amount \[mg\], must be positive
    /// * `params` - Kinetic parameters of the model
    ///
    /// # Errors
    ///
    /// Returns `Err` when the parameters do not fit the route (e.g. patch
    /// evaluation without a wear duration).
    fn concentration(
        &self,
        elapsed: f64,
        dose: f64,
        params: &KineticParameters,
    ) -> Result<f64, String>;

    /// Steady-state concentration under repetition every `interval`
    ///
    /// Represents the infinite periodic superposition of the single-event
    /// response, evaluated in closed form. Defined for every `elapsed` value
    /// (the waveform is periodic), not only non-negative ones.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the closed form is unavailable for the parameter
    /// set (periodic patch superposition with coincident rate constants).
    fn steady_state(
        &self,
        elapsed: f64,
        dose: f64,
        interval: f64,
        params: &KineticParameters,
    ) -> Result<f64, String>;

    /// Mass-balance steady-state mean concentration, when the route has one
    ///
    /// Bolus routes return `Some(dose · d / (k3 · interval))`; patch routes
    /// return `None` (no closed-form mean is defined for two-phase input).
    fn steady_state_average(
        &self,
        dose: f64,
        interval: f64,
        params: &KineticParameters,
    ) -> Option<f64>;

    /// Name of the route (used for display and error messages)
    fn name(&self) -> &str;
}
