//! Service-specific tests
//!
//! Each service has its own test file. Tests run against the in-memory
//! store with a mocked clock; failure paths script a mock store.

#[cfg(test)]
mod acknowledgment;

// Common test utilities for services
#[cfg(test)]
pub mod common {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use shared::{PoNumber, PoStatus, PurchaseOrder, Vendor, VendorCode};

    use crate::services::MemoryStore;
    use crate::traits::{MockClock, ProcurementStore};

    /// Fixed reference instant used across service tests
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    /// Clock frozen at the given instant
    pub fn frozen_clock(now: DateTime<Utc>) -> Arc<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        Arc::new(clock)
    }

    pub fn vendor(code: &str) -> Vendor {
        Vendor {
            vendor_code: VendorCode::new(code),
            name: format!("Vendor {code}"),
            contact_details: "purchasing@example.com".to_string(),
            address: "1 Supply Street".to_string(),
            on_time_delivery_rate: None,
            quality_rating_avg: None,
            average_response_time: None,
            fulfillment_rate: None,
        }
    }

    /// An `ordered` PO due one week after `base_time`
    pub fn po(number: &str, vendor: Option<&str>) -> PurchaseOrder {
        PurchaseOrder {
            po_number: PoNumber::new(number),
            vendor: vendor.map(VendorCode::new),
            order_date: base_time(),
            delivery_date: base_time() + Duration::days(7),
            items: serde_json::json!([{"sku": "bolt-m8", "count": 50}]),
            quantity: 50,
            status: PoStatus::Ordered,
            quality_rating: None,
            issue_date: None,
            acknowledgment_date: None,
        }
    }

    pub async fn seed(store: &MemoryStore, vendors: &[Vendor], pos: &[PurchaseOrder]) {
        for v in vendors {
            store.save_vendor(v).await.unwrap();
        }
        for p in pos {
            store.save_po(p).await.unwrap();
        }
    }
}
