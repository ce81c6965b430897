//! Core business logic modules
//!
//! Pure, I/O-free logic: the vendor metric formulas and the lifecycle
//! transition planner. Everything here is deterministic against its inputs.

pub mod metrics;
pub mod transition;

pub use transition::{plan_acknowledge, plan_update, UpdatePlan};
