//! Shared types for the procurement system
//!
//! Contains the domain entities (vendors, purchase orders, performance
//! snapshots), the boundary input structs, and the validation errors they
//! can raise. Service-internal types live in the `procurement` crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
