//! Acknowledgment handler service
//!
//! The one transition that sets `acknowledged` directly from any prior
//! status: it does not gate on a prior acknowledgment (it *is* the
//! acknowledgment), only on vendor assignment and on not having been
//! acknowledged before. Feeds the vendor's response-time statistic.

use std::sync::Arc;

use shared::{PoNumber, PoStatus, PurchaseOrder};

use crate::core::transition::plan_acknowledge;
use crate::error::{ProcurementError, ProcurementResult};
use crate::services::aggregator::MetricsAggregator;
use crate::traits::{Clock, ProcurementStore};

/// Handles the vendor acknowledgment transition
pub struct AcknowledgmentHandler<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
    aggregator: MetricsAggregator<S, C>,
}

impl<S, C> AcknowledgmentHandler<S, C>
where
    S: ProcurementStore,
    C: Clock,
{
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        let aggregator = MetricsAggregator::new(Arc::clone(&store), Arc::clone(&clock));
        Self {
            store,
            clock,
            aggregator,
        }
    }

    /// Acknowledge a purchase order on behalf of its vendor.
    ///
    /// Sets `status = acknowledged`, stamps `acknowledgment_date` (at most
    /// once per PO), persists, then recomputes the vendor's average
    /// response time over all of its acknowledged POs.
    pub async fn acknowledge(&self, number: &PoNumber) -> ProcurementResult<PurchaseOrder> {
        let mut po = self
            .store
            .get_po(number)
            .await?
            .ok_or_else(|| ProcurementError::not_found("purchase order", number))?;

        let vendor = plan_acknowledge(&po)
            .map_err(ProcurementError::InvalidTransition)?
            .clone();

        po.status = PoStatus::Acknowledged;
        po.acknowledgment_date = Some(self.clock.now());
        self.store.save_po(&po).await?;
        tracing::info!(po = %number, vendor = %vendor, "purchase order acknowledged");

        self.aggregator.recompute_response_time(&vendor).await?;
        Ok(po)
    }
}
