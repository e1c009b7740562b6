//! Transdermal patch delivery route
//!
//! Two-phase mechanism: wear phase while the patch is on, residual-mass
//! decay after removal. Both patch models ("patch tw", "patch ow") share
//! this route; the wear duration lives in their parameter tuples.

use crate::kinetics::{DeliveryRoute, KineticParameters};
use crate::solver::patch;

/// Patch delivery mechanism
///
/// Stateless dispatch into the patch solver. The steady-state form can be
/// unavailable (coincident rate constants) and that error propagates to the
/// caller instead of being papered over with a number.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchRoute;

impl DeliveryRoute for PatchRoute {
    fn concentration(
        &self,
        elapsed: f64,
        dose: f64,
        params: &KineticParameters,
    ) -> Result<f64, String> {
        patch::concentration(elapsed, dose, params)
    }

    fn steady_state(
        &self,
        elapsed: f64,
        dose: f64,
        interval: f64,
        params: &KineticParameters,
    ) -> Result<f64, String> {
        patch::steady_state(elapsed, dose, interval, params)
    }

    fn steady_state_average(
        &self,
        _dose: f64,
        _interval: f64,
        _params: &KineticParameters,
    ) -> Option<f64> {
        // No closed-form mean for two-phase input
        None
    }

    fn name(&self) -> &str {
        "Patch"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
