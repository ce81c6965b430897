//! In-memory reference implementation of the procurement store
//!
//! Hash maps behind a single `tokio::sync::RwLock`, so every store call is
//! atomic with respect to every other. Intended for tests and embedded use;
//! a durable backend would implement the same trait.

use std::collections::HashMap;

use shared::{HistoricalPerformance, PoNumber, PurchaseOrder, Vendor, VendorCode};
use tokio::sync::RwLock;

use crate::traits::{ProcurementStore, StoreResult};

#[derive(Default)]
struct StoreInner {
    vendors: HashMap<VendorCode, Vendor>,
    purchase_orders: HashMap<PoNumber, PurchaseOrder>,
    history: HashMap<VendorCode, HistoricalPerformance>,
}

/// In-memory procurement store
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProcurementStore for MemoryStore {
    async fn get_vendor(&self, code: &VendorCode) -> StoreResult<Option<Vendor>> {
        let inner = self.inner.read().await;
        Ok(inner.vendors.get(code).cloned())
    }

    async fn save_vendor(&self, vendor: &Vendor) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .vendors
            .insert(vendor.vendor_code.clone(), vendor.clone());
        Ok(())
    }

    async fn list_vendors(&self) -> StoreResult<Vec<Vendor>> {
        let inner = self.inner.read().await;
        let mut vendors: Vec<Vendor> = inner.vendors.values().cloned().collect();
        vendors.sort_by(|a, b| a.vendor_code.as_str().cmp(b.vendor_code.as_str()));
        Ok(vendors)
    }

    async fn delete_vendor(&self, code: &VendorCode) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.vendors.remove(code).is_some())
    }

    async fn get_po(&self, number: &PoNumber) -> StoreResult<Option<PurchaseOrder>> {
        let inner = self.inner.read().await;
        Ok(inner.purchase_orders.get(number).cloned())
    }

    async fn save_po(&self, po: &PurchaseOrder) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .purchase_orders
            .insert(po.po_number.clone(), po.clone());
        Ok(())
    }

    async fn list_pos(&self) -> StoreResult<Vec<PurchaseOrder>> {
        let inner = self.inner.read().await;
        let mut pos: Vec<PurchaseOrder> = inner.purchase_orders.values().cloned().collect();
        pos.sort_by(|a, b| a.po_number.as_str().cmp(b.po_number.as_str()));
        Ok(pos)
    }

    async fn pos_for_vendor(&self, code: &VendorCode) -> StoreResult<Vec<PurchaseOrder>> {
        let inner = self.inner.read().await;
        let mut pos: Vec<PurchaseOrder> = inner
            .purchase_orders
            .values()
            .filter(|po| po.vendor.as_ref() == Some(code))
            .cloned()
            .collect();
        pos.sort_by(|a, b| a.po_number.as_str().cmp(b.po_number.as_str()));
        Ok(pos)
    }

    async fn delete_po(&self, number: &PoNumber) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.purchase_orders.remove(number).is_some())
    }

    async fn upsert_history(&self, row: &HistoricalPerformance) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.history.insert(row.vendor.clone(), row.clone());
        Ok(())
    }

    async fn get_history(&self, code: &VendorCode) -> StoreResult<Option<HistoricalPerformance>> {
        let inner = self.inner.read().await;
        Ok(inner.history.get(code).cloned())
    }
}
