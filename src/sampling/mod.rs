//! Curve sampling and posterior uncertainty
//!
//! This module turns the scalar solvers into plottable point sets:
//!
//! - **`curve`**: evaluate a scalar function over an interval at fixed
//!   uniform steps (line curves) or at uniform-random abscissas
//!   (uncertainty clouds), producing [`CurveSeries`](curve::CurveSeries)
//!   point sets
//! - **`ensemble`**: draw kinetic parameters from a model's posterior
//!   ensemble through an injectable random source
//!
//! # Parallel Execution Threshold
//!
//! Deciding *when* to hand point evaluation off to Rayon is a sampling
//! concern, not a solver concern, so the knob lives here. Curve generation
//! is embarrassingly parallel — every point is independent — but below a
//! few hundred points the thread-pool dispatch overhead exceeds the
//! per-point work.
//!
//! The threshold is stored in an AtomicUsize so that it can be changed at
//! runtime (useful in benchmarks and tests) without requiring a mutex on
//! every sampling call. Relaxed ordering is sufficient: the value is a
//! performance hint, not a synchronisation point.

use std::sync::atomic::{AtomicUsize, Ordering};

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod curve;
pub mod ensemble;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use curve::{
    sample_random, sample_uniform, schedule_curve, uncertainty_cloud, CurveSeries,
};

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================

/// Default number of curve points above which sampling switches to parallel
/// iteration.
///
/// The crossover is set at 256 points. A closed-form evaluation costs a few
/// exponentials per event, so the per-point work is heavier than simple
/// arithmetic but still cheap enough that small curves lose to Rayon's
/// dispatch overhead.
const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Curve sampling uses sequential iteration when the requested point count
/// is below this value and switches to Rayon above it — but only when the
/// crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use pk_rs::sampling::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-point threshold would force
/// parallel dispatch on every single-point curve, which is never the
/// intended behaviour.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Tests
// =================================================================================================
