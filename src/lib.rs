//! pk-rs: Pharmacokinetic Prediction Engine
//!
//! Computes predicted serum hormone concentration over time from scheduled
//! drug administrations — ester injections and transdermal patches — using
//! closed-form solutions of a linear three-compartment first-order model.
//! No ODE solver, no numerical integration: every value is an exact
//! evaluation, including infinite periodic steady states.
//!
//! # Architecture
//!
//! pk-rs is built on two core principles:
//!
//! 1. **Separation of Mechanisms and Closed Forms**
//!    - Delivery models define which equations apply (what to evaluate)
//!    - The solver module provides the exact solutions (how to evaluate)
//!
//! 2. **Purity and Explicit State**
//!    - Every solver is a pure function of its arguments
//!    - The parameter store is read-only after load
//!    - Unit conversion and randomness are explicit parameters, never
//!      process-wide state
//!
//! # Quick Start
//!
//! ```rust
//! use pk_rs::models::{standard_store, ModelId};
//! use pk_rs::sampling::schedule_curve;
//! use pk_rs::schedule::{concentration_at, DoseEvent, Schedule};
//!
//! fn main() -> Result<(), String> {
//!     let store = standard_store();
//!
//!     // 1. Describe the schedule: 4 mg EV im on days 0 and 7
//!     let model = ModelId::parse("EV im")?;
//!     let schedule = Schedule::new(vec![
//!         DoseEvent::new(0.0, 4.0, model),
//!         DoseEvent::new(7.0, 4.0, model),
//!     ]);
//!
//!     // 2. Scalar evaluation at day 10
//!     let level = concentration_at(&schedule, 10.0, store, 1.0)?;
//!     assert!(level > 0.0);
//!
//!     // 3. Plottable curve over one month
//!     let curve = schedule_curve(&schedule, store, 0.0, 30.0, 301, 1.0)?;
//!     assert_eq!(curve.len(), 301);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`kinetics`]: Parameter tuples and the delivery-route capability
//! - [`models`]: The fixed model registry (identifiers, parameters,
//!   posterior ensembles, routes)
//! - [`solver`]: Closed-form solutions (single event, steady state, patch)
//! - [`schedule`]: Dose schedules, regimens and multi-event superposition
//! - [`sampling`]: Curve/cloud sampling and posterior draws
//! - [`output`]: CSV export and plotting (optional, feature `output`)
//!
//! # Data Flow
//!
//! ```text
//! ┌─────────────────┐
//! │ Schedule /      │  (dose events, model ids)
//! │ Regimen         │
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐   ┌──────────────────┐
//! │ Delivery Routes │──▶│ Closed-Form      │ ← the numeric core
//! │ (bolus, patch)  │   │ Solvers          │
//! └────────┬────────┘   └──────────────────┘
//!          │
//! ┌────────▼────────┐
//! │ Superposition   │  (sum over events, unit factor)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Curve Sampling  │  (line curves, uncertainty clouds)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Output          │  (CSV, plots — external collaborators)
//! └─────────────────┘
//! ```

// Core modules
pub mod kinetics;
pub mod models;
pub mod sampling;
pub mod schedule;
pub mod solver;

#[cfg(feature = "output")]
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use pk_rs::prelude::*;
    //! ```
    pub use crate::kinetics::{DeliveryRoute, KineticParameters};
    pub use crate::models::{standard_store, ModelId, ModelKind, ModelStore};
    pub use crate::sampling::{schedule_curve, uncertainty_cloud, CurveSeries};
    pub use crate::schedule::{
        concentration_at, concentration_at_sampled, DoseEvent, Schedule, SteadyStateRegime,
        TimeEncoding,
    };
}
