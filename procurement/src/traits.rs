//! Trait definitions with mockall annotations for testing
//!
//! The storage and clock seams of the procurement core. Both traits carry
//! mock generation annotations so services can be tested against scripted
//! stores and a frozen wall clock.

use chrono::{DateTime, Utc};
use shared::{HistoricalPerformance, PoNumber, PurchaseOrder, Vendor, VendorCode};
use thiserror::Error;

/// Infrastructure-level storage failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("storage write failed: {message}")]
    WriteFailed { message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage abstraction for vendors, purchase orders and performance history
///
/// One trait covers all three entity families so an implementation can run
/// compound read-recompute-write sequences under a single lock. Lookup
/// misses are `Ok(None)`; `Err` is reserved for infrastructure failures.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ProcurementStore: Send + Sync {
    async fn get_vendor(&self, code: &VendorCode) -> StoreResult<Option<Vendor>>;

    async fn save_vendor(&self, vendor: &Vendor) -> StoreResult<()>;

    async fn list_vendors(&self) -> StoreResult<Vec<Vendor>>;

    /// Returns whether a vendor row was actually removed
    async fn delete_vendor(&self, code: &VendorCode) -> StoreResult<bool>;

    async fn get_po(&self, number: &PoNumber) -> StoreResult<Option<PurchaseOrder>>;

    async fn save_po(&self, po: &PurchaseOrder) -> StoreResult<()>;

    async fn list_pos(&self) -> StoreResult<Vec<PurchaseOrder>>;

    /// All purchase orders currently referencing the vendor
    async fn pos_for_vendor(&self, code: &VendorCode) -> StoreResult<Vec<PurchaseOrder>>;

    async fn delete_po(&self, number: &PoNumber) -> StoreResult<bool>;

    /// Create-or-replace the single history row for the vendor
    async fn upsert_history(&self, row: &HistoricalPerformance) -> StoreResult<()>;

    async fn get_history(&self, code: &VendorCode) -> StoreResult<Option<HistoricalPerformance>>;
}

/// Wall-clock capability, injected so tests can fix time deterministically
#[mockall::automock]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
