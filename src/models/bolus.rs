//! Bolus (injection) delivery route
//!
//! Single-phase mechanism: the whole dose enters the depot compartment at
//! the administration instant and the chain response is the plain
//! three-compartment closed form. All intramuscular and subcutaneous ester
//! models share this route; they differ only in their parameter tuples.

use crate::kinetics::{DeliveryRoute, KineticParameters};
use crate::solver::{single_event, steady_state};

/// Injection-like delivery mechanism
///
/// Stateless: the route is pure dispatch into [`crate::solver`]; parameters
/// arrive per call from the model store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BolusRoute;

impl DeliveryRoute for BolusRoute {
    fn concentration(
        &self,
        elapsed: f64,
        dose: f64,
        params: &KineticParameters,
    ) -> Result<f64, String> {
        Ok(single_event::concentration(elapsed, dose, params))
    }

    fn steady_state(
        &self,
        elapsed: f64,
        dose: f64,
        interval: f64,
        params: &KineticParameters,
    ) -> Result<f64, String> {
        Ok(steady_state::concentration(elapsed, dose, interval, params))
    }

    fn steady_state_average(
        &self,
        dose: f64,
        interval: f64,
        params: &KineticParameters,
    ) -> Option<f64> {
        Some(steady_state::average(dose, interval, params))
    }

    fn name(&self) -> &str {
        "Bolus"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
