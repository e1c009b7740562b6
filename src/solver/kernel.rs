//! Exponential evaluation kernels
//!
//! Every closed form in this engine is a linear combination of the terms
//! `e^{-kt}`, `t·e^{-kt}` and `t²·e^{-kt}`. Evaluated at a single elapsed
//! time those are just the three expressions; summed over an infinite train
//! of administrations repeated every `T` they become geometric-series closed
//! forms. The `ExpTerms` trait abstracts over the two cases so each
//! degeneracy branch of the compartment solution is written exactly once and
//! serves both the single-event and the steady-state solvers.
//!
//! # Identities
//!
//! With `q = e^{-kT}` and phase `τ = t mod T`:
//!
//! ```text
//! Σₙ e^{-k(τ+nT)}      = e^{-kτ} / (1-q)
//! Σₙ (τ+nT)·e^{-k(τ+nT)}  = e^{-kτ} · [τ/(1-q) + T·q/(1-q)²]
//! Σₙ (τ+nT)²·e^{-k(τ+nT)} = e^{-kτ} · [τ²/(1-q) + 2τT·q/(1-q)² + T²·q(1+q)/(1-q)³]
//! ```
//!
//! The `1-q` factors are computed through `expm1` so short intervals (small
//! `kT`) keep full precision.

// =================================================================================================
// Kernel Trait
// =================================================================================================

/// Exponential term evaluation for one administration train
///
/// # Contract
///
/// `e0`, `e1`, `e2` return `Σₙ tₙ^m · e^{-k·tₙ}` for `m = 0, 1, 2`, where
/// the `tₙ` are the elapsed times of the train (a single value for one
/// administration, `τ + nT` for a periodic train).
pub trait ExpTerms {
    /// `Σ e^{-k·tₙ}`
    fn e0(&self, k: f64) -> f64;

    /// `Σ tₙ · e^{-k·tₙ}`
    fn e1(&self, k: f64) -> f64;

    /// `Σ tₙ² · e^{-k·tₙ}`
    fn e2(&self, k: f64) -> f64;
}

// =================================================================================================
// Single Dose
// =================================================================================================

/// Kernel for one administration at elapsed time `t >= 0`
///
/// Causality (`t < 0` → response 0) is enforced by the solvers before a
/// kernel is constructed, so the elapsed time here is never negative.
#[derive(Debug, Clone, Copy)]
pub struct SingleDose {
    elapsed: f64,
}

impl SingleDose {
    /// Create a kernel for one administration
    pub fn new(elapsed: f64) -> Self {
        debug_assert!(elapsed >= 0.0, "negative elapsed time reached a kernel");
        Self { elapsed }
    }
}

impl ExpTerms for SingleDose {
    #[inline]
    fn e0(&self, k: f64) -> f64 {
        (-k * self.elapsed).exp()
    }

    #[inline]
    fn e1(&self, k: f64) -> f64 {
        self.elapsed * self.e0(k)
    }

    #[inline]
    fn e2(&self, k: f64) -> f64 {
        self.elapsed * self.elapsed * self.e0(k)
    }
}

// =================================================================================================
// Periodic Train
// =================================================================================================

/// Kernel for an infinite administration train repeated every `interval`
///
/// The phase is `t mod interval` (Euclidean remainder, so the waveform is
/// defined and periodic for every real `t`).
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    phase: f64,
    interval: f64,
}

impl Periodic {
    /// Create a periodic kernel
    ///
    /// # Panics
    ///
    /// Panics when `interval <= 0`. Caller-facing interval validation happens
    /// at the regime level; a non-positive interval here is a caller bug.
    pub fn new(t: f64, interval: f64) -> Self {
        assert!(
            interval > 0.0,
            "periodic kernel requires a positive interval, got {}",
            interval
        );
        Self {
            phase: t.rem_euclid(interval),
            interval,
        }
    }

    /// `1 - e^{-k·T}`, accurate for small `k·T`
    #[inline]
    fn one_minus_q(&self, k: f64) -> f64 {
        -(-k * self.interval).exp_m1()
    }
}

impl ExpTerms for Periodic {
    #[inline]
    fn e0(&self, k: f64) -> f64 {
        (-k * self.phase).exp() / self.one_minus_q(k)
    }

    fn e1(&self, k: f64) -> f64 {
        let q = (-k * self.interval).exp();
        let r = self.one_minus_q(k);
        let tau = self.phase;
        (-k * tau).exp() * (tau / r + self.interval * q / (r * r))
    }

    fn e2(&self, k: f64) -> f64 {
        let q = (-k * self.interval).exp();
        let r = self.one_minus_q(k);
        let tau = self.phase;
        let t_int = self.interval;
        (-k * tau).exp()
            * (tau * tau / r
                + 2.0 * tau * t_int * q / (r * r)
                + t_int * t_int * q * (1.0 + q) / (r * r * r))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
