//! Historical performance recorder service
//!
//! Snapshots a vendor's current metrics into the single history row kept per
//! vendor. A pure copy with a refreshed timestamp; no validation. Invoked
//! only after a PO reaches `completed`.

use std::sync::Arc;

use shared::{HistoricalPerformance, VendorCode};

use crate::error::{ProcurementError, ProcurementResult};
use crate::traits::{Clock, ProcurementStore};

/// Upserts point-in-time vendor performance snapshots
pub struct PerformanceRecorder<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> PerformanceRecorder<S, C>
where
    S: ProcurementStore,
    C: Clock,
{
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Copy the vendor's current metric fields (including unset ones) into
    /// its history row, created on first write and overwritten thereafter.
    pub async fn record(&self, code: &VendorCode) -> ProcurementResult<HistoricalPerformance> {
        let vendor = self
            .store
            .get_vendor(code)
            .await?
            .ok_or_else(|| ProcurementError::not_found("vendor", code))?;

        let row = HistoricalPerformance {
            vendor: vendor.vendor_code.clone(),
            date: self.clock.now(),
            on_time_delivery_rate: vendor.on_time_delivery_rate,
            quality_rating_avg: vendor.quality_rating_avg,
            average_response_time: vendor.average_response_time,
            fulfillment_rate: vendor.fulfillment_rate,
        };
        self.store.upsert_history(&row).await?;
        tracing::debug!(vendor = %code, "recorded performance snapshot");
        Ok(row)
    }
}
