//! Posterior ensemble sampling
//!
//! The posterior ensemble of a model is a precomputed finite set of
//! plausible parameter tuples. Drawing one tuple per evaluation turns the
//! deterministic solvers into stochastic predictors; thousands of draws at
//! random abscissas approximate a predictive interval without any explicit
//! confidence-band computation.
//!
//! The random source is injectable: callers pass any `rand::Rng`, so
//! production code uses `rand::rng()` while tests supply seeded `StdRng`
//! sequences and get reproducible draws.

use rand::Rng;

use crate::kinetics::KineticParameters;
use crate::models::{ModelId, ModelStore};

// =================================================================================================
// Draws
// =================================================================================================

/// Draw kinetic parameters uniformly from a model's posterior ensemble
///
/// # Errors
///
/// Returns `Err` when the model has an empty ensemble (never the case for
/// the standard store, but a custom store could).
pub fn draw<'a, R: Rng + ?Sized>(
    store: &'a ModelStore,
    model: ModelId,
    rng: &mut R,
) -> Result<&'a KineticParameters, String> {
    let ensemble = store.ensemble(model);
    if ensemble.is_empty() {
        return Err(format!("Model {} has no posterior ensemble", model));
    }
    Ok(&ensemble[rng.random_range(0..ensemble.len())])
}

/// Fetch the ensemble entry at an explicit index
///
/// # Errors
///
/// Returns `Err` when `index` is outside the ensemble's range.
pub fn at_index(
    store: &ModelStore,
    model: ModelId,
    index: usize,
) -> Result<&KineticParameters, String> {
    let ensemble = store.ensemble(model);
    ensemble.get(index).ok_or_else(|| {
        format!(
            "Ensemble index {} out of range for model {} (len {})",
            index,
            model,
            ensemble.len()
        )
    })
}

// =================================================================================================
// Tests
// =================================================================================================
