//! Test fixtures and data for integration tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use shared::{PoCreate, PoNumber, PoStatus, PoUpdate, VendorCode, VendorProfile};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const VENDOR_1: &'static str = "V1";
    pub const VENDOR_2: &'static str = "V2";
    pub const PO_1: &'static str = "PO1";
    pub const PO_2: &'static str = "PO2";

    /// Reference instant all scenarios start from
    pub fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    pub fn vendor_code(code: &str) -> VendorCode {
        VendorCode::new(code)
    }

    pub fn po_number(number: &str) -> PoNumber {
        PoNumber::new(number)
    }

    pub fn vendor_profile(code: &str) -> VendorProfile {
        VendorProfile {
            vendor_code: VendorCode::new(code),
            name: format!("Vendor {code}"),
            contact_details: "purchasing@example.com".to_string(),
            address: "1 Supply Street".to_string(),
        }
    }

    /// A create payload due one week after `start_time`
    pub fn po_create(number: &str, vendor: Option<&str>) -> PoCreate {
        PoCreate {
            po_number: PoNumber::new(number),
            vendor: vendor.map(VendorCode::new),
            delivery_date: Self::start_time() + Duration::days(7),
            items: serde_json::json!([{"sku": "bolt-m8", "count": 50}]),
            quantity: 50,
        }
    }

    /// An update payload carrying the same field overwrites every time
    pub fn po_update(vendor: Option<&str>, status: &str, rating: Option<f64>) -> PoUpdate {
        PoUpdate {
            vendor: vendor.map(VendorCode::new),
            delivery_date: Self::start_time() + Duration::days(7),
            items: serde_json::json!([{"sku": "bolt-m8", "count": 50}]),
            quantity: 50,
            status: PoStatus::parse(status),
            quality_rating: rating,
        }
    }
}
