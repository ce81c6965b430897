//! Core domain types and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Caller-assigned unique identifier for vendors
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorCode(String);

impl VendorCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-assigned unique identifier for purchase orders
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoNumber(String);

impl PoNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a purchase order
///
/// Only `ordered`, `acknowledged` and `completed` carry lifecycle meaning;
/// any other caller-supplied string is kept opaquely in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PoStatus {
    Ordered,
    Acknowledged,
    Completed,
    Other(String),
}

impl PoStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "ordered" => PoStatus::Ordered,
            "acknowledged" => PoStatus::Acknowledged,
            "completed" => PoStatus::Completed,
            other => PoStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PoStatus::Ordered => "ordered",
            PoStatus::Acknowledged => "acknowledged",
            PoStatus::Completed => "completed",
            PoStatus::Other(s) => s,
        }
    }
}

impl Default for PoStatus {
    fn default() -> Self {
        PoStatus::Ordered
    }
}

impl fmt::Display for PoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for PoStatus {
    fn from(s: String) -> Self {
        PoStatus::parse(&s)
    }
}

impl From<PoStatus> for String {
    fn from(status: PoStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A vendor and its derived performance metrics
///
/// The four metric fields are owned by the metrics aggregator; they stay
/// `None` until first computable. Rates are fractions in [0, 1],
/// `average_response_time` is in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub vendor_code: VendorCode,
    pub name: String,
    pub contact_details: String,
    pub address: String,
    pub on_time_delivery_rate: Option<f64>,
    pub quality_rating_avg: Option<f64>,
    pub average_response_time: Option<f64>,
    pub fulfillment_rate: Option<f64>,
}

/// Caller-editable vendor fields (create/update input)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VendorProfile {
    pub vendor_code: VendorCode,
    pub name: String,
    pub contact_details: String,
    pub address: String,
}

impl From<VendorProfile> for Vendor {
    fn from(profile: VendorProfile) -> Self {
        Vendor {
            vendor_code: profile.vendor_code,
            name: profile.name,
            contact_details: profile.contact_details,
            address: profile.address,
            on_time_delivery_rate: None,
            quality_rating_avg: None,
            average_response_time: None,
            fulfillment_rate: None,
        }
    }
}

/// Read model for the vendor performance endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendorPerformance {
    pub on_time_delivery_rate: Option<f64>,
    pub quality_rating_avg: Option<f64>,
    pub average_response_time: Option<f64>,
    pub fulfillment_rate: Option<f64>,
}

impl From<&Vendor> for VendorPerformance {
    fn from(vendor: &Vendor) -> Self {
        VendorPerformance {
            on_time_delivery_rate: vendor.on_time_delivery_rate,
            quality_rating_avg: vendor.quality_rating_avg,
            average_response_time: vendor.average_response_time,
            fulfillment_rate: vendor.fulfillment_rate,
        }
    }
}

/// A purchase order issued to (at most) one vendor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub po_number: PoNumber,
    pub vendor: Option<VendorCode>,
    /// Set once at creation, never rewritten
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    /// Opaque structured payload describing the ordered items
    pub items: serde_json::Value,
    pub quantity: u32,
    pub status: PoStatus,
    /// Only non-null while the order is completed
    pub quality_rating: Option<f64>,
    /// Stamped whenever a non-null vendor is (re)assigned
    pub issue_date: Option<DateTime<Utc>>,
    /// Stamped exactly once, by the acknowledgment handler
    pub acknowledgment_date: Option<DateTime<Utc>>,
}

/// Point-in-time copy of a vendor's metrics, one row per vendor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPerformance {
    pub vendor: VendorCode,
    /// Timestamp of the last upsert
    pub date: DateTime<Utc>,
    pub on_time_delivery_rate: Option<f64>,
    pub quality_rating_avg: Option<f64>,
    pub average_response_time: Option<f64>,
    pub fulfillment_rate: Option<f64>,
}

/// Input fields for creating a purchase order
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoCreate {
    pub po_number: PoNumber,
    pub vendor: Option<VendorCode>,
    pub delivery_date: DateTime<Utc>,
    pub items: serde_json::Value,
    pub quantity: u32,
}

impl PoCreate {
    /// Structural validation of caller-supplied fields
    pub fn validate(&self) -> SharedResult<()> {
        if self.quantity == 0 {
            return Err(SharedError::InvalidQuantity {
                value: self.quantity as i64,
            });
        }
        if !self.items.is_array() && !self.items.is_object() {
            return Err(SharedError::InvalidItems);
        }
        Ok(())
    }
}

/// Input fields for updating a purchase order
///
/// `vendor` is the proposed vendor code; resolution (and the not-found case)
/// is handled by the lifecycle service. A supplied `quality_rating` is only
/// legal together with a `completed` target status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoUpdate {
    pub vendor: Option<VendorCode>,
    pub delivery_date: DateTime<Utc>,
    pub items: serde_json::Value,
    pub quantity: u32,
    pub status: PoStatus,
    pub quality_rating: Option<f64>,
}
