//! Vendor metric formulas
//!
//! Pure functions over a vendor's purchase-order history. Every ratio is
//! guarded against an empty denominator by returning `None`; the aggregator
//! decides whether `None` means "leave the stored value alone" or "clear it".

use chrono::{DateTime, Utc};
use shared::{PoStatus, PurchaseOrder};

fn completed(pos: &[PurchaseOrder]) -> impl Iterator<Item = &PurchaseOrder> {
    pos.iter().filter(|po| po.status == PoStatus::Completed)
}

/// Fraction of the vendor's POs that reached `completed`.
///
/// `None` iff the vendor has no POs at all.
pub fn fulfillment_rate(pos: &[PurchaseOrder]) -> Option<f64> {
    if pos.is_empty() {
        return None;
    }
    Some(completed(pos).count() as f64 / pos.len() as f64)
}

/// Fraction of completed POs whose delivery date has passed at `now`.
///
/// Evaluated against the recomputation wall clock, not the state of the
/// world at completion time. `None` iff there is no completed PO.
pub fn on_time_delivery_rate(pos: &[PurchaseOrder], now: DateTime<Utc>) -> Option<f64> {
    let completed_count = completed(pos).count();
    if completed_count == 0 {
        return None;
    }
    let on_time = completed(pos).filter(|po| po.delivery_date <= now).count();
    Some(on_time as f64 / completed_count as f64)
}

/// Average quality rating over completed POs that carry one.
///
/// `None` when no completed PO has a rating.
pub fn quality_rating_avg(pos: &[PurchaseOrder]) -> Option<f64> {
    let rated: Vec<f64> = completed(pos).filter_map(|po| po.quality_rating).collect();
    if rated.is_empty() {
        return None;
    }
    Some(rated.iter().sum::<f64>() / rated.len() as f64)
}

/// Mean acknowledgment delay in seconds over POs with both dates set.
///
/// `None` when no PO qualifies.
pub fn average_response_time(pos: &[PurchaseOrder]) -> Option<f64> {
    let durations: Vec<f64> = pos
        .iter()
        .filter_map(|po| {
            let issued = po.issue_date?;
            let acknowledged = po.acknowledgment_date?;
            Some((acknowledged - issued).num_milliseconds() as f64 / 1000.0)
        })
        .collect();
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<f64>() / durations.len() as f64)
}
