//! Metrics aggregator service
//!
//! Recomputes a vendor's derived metrics from its full PO history. Only this
//! service writes the four metric fields. Each recomputation is a single
//! read-recompute-write pass committed with one vendor save; callers that
//! need serialization against concurrent writers hold the boundary write
//! gate for the whole pass.

use std::sync::Arc;

use shared::{PoStatus, Vendor, VendorCode};

use crate::core::metrics;
use crate::error::{ProcurementError, ProcurementResult};
use crate::traits::{Clock, ProcurementStore};

/// Recomputes and persists vendor performance metrics
pub struct MetricsAggregator<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> MetricsAggregator<S, C>
where
    S: ProcurementStore,
    C: Clock,
{
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Recompute fulfillment, on-time and quality metrics for a vendor.
    ///
    /// Fulfillment rate is recomputed whenever the vendor has at least one
    /// PO; the completed-PO metrics only when at least one PO is completed.
    /// Metrics that cannot be computed keep their previously stored value,
    /// except `quality_rating_avg`, which is cleared when no completed PO
    /// carries a rating. On-time delivery is evaluated against the current
    /// wall clock at recomputation time.
    pub async fn recompute(&self, code: &VendorCode) -> ProcurementResult<Vendor> {
        let mut vendor = self
            .store
            .get_vendor(code)
            .await?
            .ok_or_else(|| ProcurementError::not_found("vendor", code))?;
        let pos = self.store.pos_for_vendor(code).await?;
        let now = self.clock.now();

        if let Some(rate) = metrics::fulfillment_rate(&pos) {
            vendor.fulfillment_rate = Some(rate);
        }

        let has_completed = pos.iter().any(|po| po.status == PoStatus::Completed);
        if has_completed {
            vendor.on_time_delivery_rate = metrics::on_time_delivery_rate(&pos, now);
            vendor.quality_rating_avg = metrics::quality_rating_avg(&pos);
        }

        self.store.save_vendor(&vendor).await?;
        tracing::debug!(
            vendor = %code,
            fulfillment = ?vendor.fulfillment_rate,
            on_time = ?vendor.on_time_delivery_rate,
            quality = ?vendor.quality_rating_avg,
            "recomputed vendor metrics"
        );
        Ok(vendor)
    }

    /// Recompute the vendor's average acknowledgment delay in seconds.
    ///
    /// Averaged over all of the vendor's POs carrying both an issue and an
    /// acknowledgment date; cleared when none qualifies.
    pub async fn recompute_response_time(&self, code: &VendorCode) -> ProcurementResult<Vendor> {
        let mut vendor = self
            .store
            .get_vendor(code)
            .await?
            .ok_or_else(|| ProcurementError::not_found("vendor", code))?;
        let pos = self.store.pos_for_vendor(code).await?;

        vendor.average_response_time = metrics::average_response_time(&pos);

        self.store.save_vendor(&vendor).await?;
        tracing::debug!(
            vendor = %code,
            response_time = ?vendor.average_response_time,
            "recomputed vendor response time"
        );
        Ok(vendor)
    }
}
