//! Service implementations
//!
//! Async services wired together through the store/clock traits: the
//! lifecycle state machine, the acknowledgment handler, the metrics
//! aggregator and the history recorder, plus the production clock and the
//! in-memory reference store.

pub mod acknowledgment;
pub mod aggregator;
pub mod clock;
pub mod lifecycle;
pub mod memory_store;
pub mod recorder;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use acknowledgment::AcknowledgmentHandler;
pub use aggregator::MetricsAggregator;
pub use clock::SystemClock;
pub use lifecycle::PoLifecycle;
pub use memory_store::MemoryStore;
pub use recorder::PerformanceRecorder;
