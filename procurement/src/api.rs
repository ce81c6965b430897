//! Boundary API consumed by the surrounding request layer
//!
//! The request layer authenticates, deserializes and routes; this module
//! takes validated primitive inputs and returns `(payload, status-kind)`
//! pairs. Business rejections and lookup misses become responses;
//! infrastructure failures propagate as errors and abort the operation.
//!
//! Mutating operations serialize through a single async write gate held for
//! the whole read-recompute-write sequence, so concurrent updates to the
//! same PO or vendor cannot lose aggregate updates. Read operations bypass
//! the gate.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use shared::{
    PoCreate, PoNumber, PoUpdate, Vendor, VendorCode, VendorPerformance, VendorProfile,
};
use tokio::sync::Mutex;

use crate::error::{ProcurementError, ProcurementResult};
use crate::services::{AcknowledgmentHandler, PoLifecycle};
use crate::traits::{Clock, ProcurementStore};

/// Outcome kind for the request layer to map onto its transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Created,
    /// Business-rule rejection; the payload carries the reason
    Rejected,
    NotFound,
}

/// Payload/status pair returned by every boundary operation
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusKind,
    pub payload: serde_json::Value,
}

impl ApiResponse {
    fn new(status: StatusKind, payload: impl Serialize) -> ProcurementResult<Self> {
        Ok(Self {
            status,
            payload: serde_json::to_value(payload)?,
        })
    }
}

/// Entry point wiring the lifecycle services behind the boundary contract
pub struct ProcurementApi<S, C> {
    store: Arc<S>,
    lifecycle: PoLifecycle<S, C>,
    acknowledgment: AcknowledgmentHandler<S, C>,
    write_gate: Mutex<()>,
}

impl<S, C> ProcurementApi<S, C>
where
    S: ProcurementStore,
    C: Clock,
{
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        let lifecycle = PoLifecycle::new(Arc::clone(&store), Arc::clone(&clock));
        let acknowledgment = AcknowledgmentHandler::new(Arc::clone(&store), Arc::clone(&clock));
        Self {
            store,
            lifecycle,
            acknowledgment,
            write_gate: Mutex::new(()),
        }
    }

    /// Map a service outcome onto a response, letting storage failures through.
    fn respond<T: Serialize>(
        result: ProcurementResult<T>,
        success: StatusKind,
    ) -> ProcurementResult<ApiResponse> {
        match result {
            Ok(payload) => ApiResponse::new(success, payload),
            Err(ProcurementError::InvalidTransition(violation)) => {
                ApiResponse::new(StatusKind::Rejected, violation.to_string())
            }
            Err(ProcurementError::Validation(err)) => {
                ApiResponse::new(StatusKind::Rejected, err.to_string())
            }
            Err(err @ ProcurementError::NotFound { .. }) => {
                ApiResponse::new(StatusKind::NotFound, err.to_string())
            }
            Err(err) => Err(err),
        }
    }

    // --- purchase-order lifecycle -----------------------------------------

    pub async fn create_po(&self, fields: PoCreate) -> ProcurementResult<ApiResponse> {
        let _gate = self.write_gate.lock().await;
        Self::respond(self.lifecycle.create(fields).await, StatusKind::Created)
    }

    pub async fn update_po(
        &self,
        number: &PoNumber,
        update: PoUpdate,
    ) -> ProcurementResult<ApiResponse> {
        let _gate = self.write_gate.lock().await;
        Self::respond(self.lifecycle.update(number, update).await, StatusKind::Ok)
    }

    pub async fn acknowledge_po(&self, number: &PoNumber) -> ProcurementResult<ApiResponse> {
        let _gate = self.write_gate.lock().await;
        Self::respond(
            self.acknowledgment.acknowledge(number).await,
            StatusKind::Ok,
        )
    }

    pub async fn get_po(&self, number: &PoNumber) -> ProcurementResult<ApiResponse> {
        match self.store.get_po(number).await? {
            Some(po) => ApiResponse::new(StatusKind::Ok, po),
            None => ApiResponse::new(
                StatusKind::NotFound,
                format!("purchase order not found: {number}"),
            ),
        }
    }

    /// List purchase orders, optionally only those of one vendor.
    pub async fn list_pos(&self, vendor: Option<&VendorCode>) -> ProcurementResult<ApiResponse> {
        let pos = match vendor {
            Some(code) => self.store.pos_for_vendor(code).await?,
            None => self.store.list_pos().await?,
        };
        ApiResponse::new(StatusKind::Ok, pos)
    }

    pub async fn delete_po(&self, number: &PoNumber) -> ProcurementResult<ApiResponse> {
        let _gate = self.write_gate.lock().await;
        if self.store.delete_po(number).await? {
            ApiResponse::new(StatusKind::Ok, json!(null))
        } else {
            ApiResponse::new(
                StatusKind::NotFound,
                format!("purchase order not found: {number}"),
            )
        }
    }

    // --- vendor CRUD and read models --------------------------------------

    /// Create or update a vendor's caller-editable fields.
    ///
    /// Derived metrics are owned by the aggregator and survive profile
    /// updates untouched.
    pub async fn upsert_vendor(&self, profile: VendorProfile) -> ProcurementResult<ApiResponse> {
        let _gate = self.write_gate.lock().await;
        let (vendor, status) = match self.store.get_vendor(&profile.vendor_code).await? {
            Some(mut existing) => {
                existing.name = profile.name;
                existing.contact_details = profile.contact_details;
                existing.address = profile.address;
                (existing, StatusKind::Ok)
            }
            None => (Vendor::from(profile), StatusKind::Created),
        };
        self.store.save_vendor(&vendor).await?;
        tracing::info!(vendor = %vendor.vendor_code, "vendor saved");
        ApiResponse::new(status, vendor)
    }

    pub async fn get_vendor(&self, code: &VendorCode) -> ProcurementResult<ApiResponse> {
        match self.store.get_vendor(code).await? {
            Some(vendor) => ApiResponse::new(StatusKind::Ok, vendor),
            None => ApiResponse::new(StatusKind::NotFound, format!("vendor not found: {code}")),
        }
    }

    pub async fn list_vendors(&self) -> ProcurementResult<ApiResponse> {
        let vendors = self.store.list_vendors().await?;
        ApiResponse::new(StatusKind::Ok, vendors)
    }

    pub async fn delete_vendor(&self, code: &VendorCode) -> ProcurementResult<ApiResponse> {
        let _gate = self.write_gate.lock().await;
        if self.store.delete_vendor(code).await? {
            ApiResponse::new(StatusKind::Ok, json!(null))
        } else {
            ApiResponse::new(StatusKind::NotFound, format!("vendor not found: {code}"))
        }
    }

    /// The four derived metrics for one vendor.
    pub async fn vendor_performance(&self, code: &VendorCode) -> ProcurementResult<ApiResponse> {
        match self.store.get_vendor(code).await? {
            Some(vendor) => ApiResponse::new(StatusKind::Ok, VendorPerformance::from(&vendor)),
            None => ApiResponse::new(StatusKind::NotFound, format!("vendor not found: {code}")),
        }
    }

    /// The vendor's historical performance snapshot, if one was recorded.
    pub async fn vendor_history(&self, code: &VendorCode) -> ProcurementResult<ApiResponse> {
        match self.store.get_history(code).await? {
            Some(row) => ApiResponse::new(StatusKind::Ok, row),
            None => ApiResponse::new(
                StatusKind::NotFound,
                format!("no performance history for vendor: {code}"),
            ),
        }
    }
}
