//! Purchase-order lifecycle service
//!
//! Executes the transition plans produced by the pure planner: loads state,
//! applies field overwrites, persists according to the plan, and fans out to
//! the metrics aggregator and the history recorder when a PO completes.

use std::sync::Arc;

use shared::{PoCreate, PoNumber, PoStatus, PoUpdate, PurchaseOrder, SharedError};

use crate::core::transition::{apply_field_overwrites, plan_update, UpdatePlan};
use crate::error::{ProcurementError, ProcurementResult};
use crate::services::{aggregator::MetricsAggregator, recorder::PerformanceRecorder};
use crate::traits::{Clock, ProcurementStore};

/// State machine entry points for creating and updating purchase orders
pub struct PoLifecycle<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
    aggregator: MetricsAggregator<S, C>,
    recorder: PerformanceRecorder<S, C>,
}

impl<S, C> PoLifecycle<S, C>
where
    S: ProcurementStore,
    C: Clock,
{
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        let aggregator = MetricsAggregator::new(Arc::clone(&store), Arc::clone(&clock));
        let recorder = PerformanceRecorder::new(Arc::clone(&store), Arc::clone(&clock));
        Self {
            store,
            clock,
            aggregator,
            recorder,
        }
    }

    /// Create a new purchase order.
    ///
    /// No transition logic runs on an entity that does not yet exist: the
    /// fields are validated, a supplied vendor must resolve, and the PO is
    /// persisted as `ordered` with `order_date` stamped once, no issue or
    /// acknowledgment date.
    pub async fn create(&self, fields: PoCreate) -> ProcurementResult<PurchaseOrder> {
        fields.validate()?;

        if self.store.get_po(&fields.po_number).await?.is_some() {
            return Err(SharedError::DuplicatePoNumber {
                po_number: fields.po_number.to_string(),
            }
            .into());
        }

        if let Some(code) = &fields.vendor {
            if self.store.get_vendor(code).await?.is_none() {
                return Err(ProcurementError::not_found("vendor", code));
            }
        }

        let po = PurchaseOrder {
            po_number: fields.po_number,
            vendor: fields.vendor,
            order_date: self.clock.now(),
            delivery_date: fields.delivery_date,
            items: fields.items,
            quantity: fields.quantity,
            status: PoStatus::default(),
            quality_rating: None,
            issue_date: None,
            acknowledgment_date: None,
        };
        self.store.save_po(&po).await?;
        tracing::info!(po = %po.po_number, vendor = ?po.vendor, "purchase order created");
        Ok(po)
    }

    /// Apply an update to an existing purchase order.
    ///
    /// The proposed vendor code is resolved first (unknown codes resolve to
    /// "no vendor", they are not an error on this path). Field overwrites
    /// are applied to a working copy; whether they reach the store depends
    /// on the plan: gate rejections persist nothing, the rating-guard
    /// rejection persists the working copy with the rating cleared.
    pub async fn update(
        &self,
        number: &PoNumber,
        update: PoUpdate,
    ) -> ProcurementResult<PurchaseOrder> {
        let mut po = self
            .store
            .get_po(number)
            .await?
            .ok_or_else(|| ProcurementError::not_found("purchase order", number))?;

        let vendor = match &update.vendor {
            Some(code) => self.store.get_vendor(code).await?,
            None => None,
        };
        let resolved_code = vendor.as_ref().map(|v| v.vendor_code.clone());
        let now = self.clock.now();

        apply_field_overwrites(&mut po, &update, resolved_code.as_ref(), now);

        let plan = plan_update(
            &po,
            &update.status,
            update.quality_rating.is_some(),
            vendor.is_some(),
        );
        tracing::debug!(po = %number, ?plan, target = %update.status, "planned update");

        match plan {
            UpdatePlan::PersistFields => {
                self.store.save_po(&po).await?;
                Ok(po)
            }
            UpdatePlan::Transition => {
                po.status = update.status;
                self.store.save_po(&po).await?;
                tracing::info!(po = %number, status = %po.status, "status changed");
                Ok(po)
            }
            UpdatePlan::Complete => {
                po.status = PoStatus::Completed;
                po.quality_rating = update.quality_rating;
                self.store.save_po(&po).await?;
                tracing::info!(po = %number, rating = ?po.quality_rating, "purchase order completed");

                // Completion side effects: recompute metrics, then snapshot.
                if let Some(code) = &resolved_code {
                    self.aggregator.recompute(code).await?;
                    self.recorder.record(code).await?;
                }
                Ok(po)
            }
            UpdatePlan::ClearRatingAndReject(violation) => {
                po.quality_rating = None;
                self.store.save_po(&po).await?;
                tracing::warn!(po = %number, %violation, "update rejected, rating cleared");
                Err(ProcurementError::InvalidTransition(violation))
            }
            UpdatePlan::Reject(violation) => {
                tracing::warn!(po = %number, %violation, "update rejected");
                Err(ProcurementError::InvalidTransition(violation))
            }
        }
    }
}
