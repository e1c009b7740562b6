//! Closed-form pharmacokinetic solvers
//!
//! This module holds the numeric core of the engine: exact solutions of the
//! linear three-compartment chain k1 → k2 → k3 with first-order transfer,
//! for one administration, for infinite periodic repetition, and for the
//! two-phase transdermal patch cycle.
//!
//! # Core Concepts
//!
//! ## The Architecture (equations vs mechanisms)
//!
//! The solver layer is organized in three parts:
//!
//! 1. **Numeric helpers** (`math`) — the rate-coincidence tolerance and the
//!    log-space subtraction used by the periodic patch form.
//!
//! 2. **Kernels** (`kernel`) — `ExpTerms` abstracts "one elapsed time"
//!    versus "an infinite periodic train" so every degeneracy branch of the
//!    chain solution is written once and serves both cases.
//!
//! 3. **Closed forms** (`single_event`, `steady_state`, `patch`) — the
//!    solutions themselves, branch-complete over coincident rate constants.
//!
//! Delivery mechanisms (`crate::models`) select among these; schedules
//! (`crate::schedule`) superpose them. Nothing here retains state between
//! calls: every function is pure in its arguments.
//!
//! # Degeneracy Handling
//!
//! The general three-exponential solution divides by the pairwise rate
//! differences. Rather than comparing rates with `==` and falling through to
//! a near-singular division, branch selection uses the relative tolerance
//! [`RATE_COINCIDENCE_TOL`]: coincident-within-tolerance rates take the
//! analytic limit forms, so no evaluation path can produce NaN for valid
//! parameters.
//!
//! # Error Handling
//!
//! - Causality (`t` before the administration) is not an error: the response
//!   is exactly 0.
//! - Unsupported closed forms (AUC for most coincident-rate cases, periodic
//!   patch with coincident rates) return `Err` with a "not implemented"
//!   message — never a wrong number.
//! - Invariant violations (`logsubexp` called with `y > x`, non-positive
//!   kernel intervals) panic: they are caller bugs, not user input.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod kernel;
pub mod math;
pub mod patch;
pub mod single_event;
pub mod steady_state;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use kernel::{ExpTerms, Periodic, SingleDose};
pub use math::{logsubexp, rates_close, RATE_COINCIDENCE_TOL};
pub use single_event::ResidualMasses;
