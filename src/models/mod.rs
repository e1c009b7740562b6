//! Delivery models
//!
//! All delivery mechanisms implement the
//! [`DeliveryRoute`](crate::kinetics::DeliveryRoute) trait. The
//! superposition layer dispatches per dose event — routes are responsible
//! for selecting the closed form, the solver module for evaluating it.
//!
//! # Available Routes
//!
//! ## [`BolusRoute`] — injections
//!
//! Single-phase chain response. Serves every intramuscular and subcutaneous
//! ester model (`"EV im"`, `"EEn im"`, `"EC im"`, `"EB im"`, `"EUn im"`,
//! `"EUn casubq"`).
//!
//! ## [`PatchRoute`] — transdermal patches
//!
//! Two-phase wear/post-removal response with residual-mass handoff at the
//! removal instant. Serves `"patch tw"` and `"patch ow"`.
//!
//! # Parameters
//!
//! Kinetic parameters live in the [`ModelStore`]: one canonical tuple and a
//! posterior ensemble per [`ModelId`], loaded once from the built-in tables
//! and read-only thereafter.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod bolus;
mod data;
pub mod patch;
pub mod registry;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use bolus::BolusRoute;
pub use patch::PatchRoute;
pub use registry::{standard_store, ModelId, ModelKind, ModelStore};
