//! Procurement core: purchase-order lifecycle and vendor performance
//!
//! This library implements the PO lifecycle state machine, the vendor
//! metrics aggregator and the historical performance recorder behind a
//! storage/clock trait seam, plus the boundary API consumed by the
//! surrounding request layer. Transport, auth and request deserialization
//! are external collaborators and live elsewhere.

pub mod api;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use api::{ApiResponse, ProcurementApi, StatusKind};
pub use crate::core::transition::TransitionViolation;
pub use error::{ProcurementError, ProcurementResult};
pub use services::{
    AcknowledgmentHandler, MemoryStore, MetricsAggregator, PerformanceRecorder, PoLifecycle,
    SystemClock,
};
pub use traits::{Clock, ProcurementStore, StoreError};
