//! Kinetic model core types
//!
//! This module provides the types shared by every layer of the engine:
//! the immutable parameter tuples and the delivery-route capability.
//!
//! # Core Concepts
//!
//! - **Kinetic Parameters**: scale factor + three first-order rate constants
//!   (+ wear duration for patches), immutable after load
//! - **Delivery Route**: the evaluation capability (single event /
//!   steady state) that bolus and patch mechanisms implement
//!
//! # Architecture
//!
//! Routes are **separate from the closed-form solvers**:
//! - The route selects the **equations** for a mechanism
//! - The solver module provides the **closed forms** that evaluate them
//!
//! This separation allows the superposition layer to sum arbitrary mixed
//! schedules (injections and patches in one schedule) through a single
//! `dyn DeliveryRoute` dispatch.

// module declaration
pub mod params;
pub mod traits;

// re-export commonly used types for convenience
pub use params::KineticParameters;
pub use traits::DeliveryRoute;
