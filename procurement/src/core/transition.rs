//! Purchase-order lifecycle transition planner
//!
//! The update path of the state machine, expressed as an explicit pipeline:
//! a pure planning call returns a decision, and the lifecycle service
//! executes it (mutate, persist, trigger side effects). Gating rules, in
//! priority order:
//!
//! 1. a quality rating outside a `completed` target is always rejected,
//!    clearing any stored rating first, even when the status is unchanged;
//! 2. an unchanged status persists field overwrites only;
//! 3. any status change requires an assigned vendor and a prior
//!    acknowledgment;
//! 4. completing additionally re-checks the vendor and fans out to the
//!    metrics aggregator and the history recorder.
//!
//! The three-state sequence `ordered -> acknowledged -> completed` is the
//! intended path but is not hard-enforced; only the two gating invariants
//! are. `completed` is terminal by convention, not by rule.

use chrono::{DateTime, Utc};
use shared::{PoStatus, PoUpdate, PurchaseOrder, VendorCode};
use std::fmt;

/// Business-rule violation carried inside `ProcurementError::InvalidTransition`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionViolation {
    RatingRequiresCompletion,
    VendorNotAssigned,
    NotAcknowledged,
    CompletedWithoutVendor,
    NoVendorOnAcknowledge,
    AlreadyAcknowledged,
}

impl fmt::Display for TransitionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            TransitionViolation::RatingRequiresCompletion => {
                "quality rating only settable at completion"
            }
            TransitionViolation::VendorNotAssigned => "status change requires vendor assignment",
            TransitionViolation::NotAcknowledged => "vendor must acknowledge before status change",
            TransitionViolation::CompletedWithoutVendor => "cannot complete without vendor",
            TransitionViolation::NoVendorOnAcknowledge => "no vendor assigned",
            TransitionViolation::AlreadyAcknowledged => "already acknowledged",
        };
        write!(f, "{reason}")
    }
}

/// Decision produced by [`plan_update`], executed by the lifecycle service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePlan {
    /// Status unchanged: persist the field overwrites, nothing else
    PersistFields,
    /// Accepted status change with no metric side effects
    Transition,
    /// Accepted completion: persist, then recompute metrics and record history
    Complete,
    /// Reject, but first clear the stored quality rating and persist
    ClearRatingAndReject(TransitionViolation),
    /// Reject outright; nothing is persisted
    Reject(TransitionViolation),
}

/// Plan the update transition for a PO.
///
/// `po` carries the *current* status and acknowledgment state;
/// `vendor_resolved` reflects whether the proposed vendor code resolved to a
/// known vendor.
pub fn plan_update(
    po: &PurchaseOrder,
    target_status: &PoStatus,
    rating_supplied: bool,
    vendor_resolved: bool,
) -> UpdatePlan {
    // Rating guard runs before everything, including the unchanged-status
    // shortcut.
    if rating_supplied && *target_status != PoStatus::Completed {
        return UpdatePlan::ClearRatingAndReject(TransitionViolation::RatingRequiresCompletion);
    }

    if po.status == *target_status {
        return UpdatePlan::PersistFields;
    }

    if !vendor_resolved {
        return UpdatePlan::Reject(TransitionViolation::VendorNotAssigned);
    }

    if po.acknowledgment_date.is_none() {
        return UpdatePlan::Reject(TransitionViolation::NotAcknowledged);
    }

    if *target_status == PoStatus::Completed {
        if !vendor_resolved {
            return UpdatePlan::Reject(TransitionViolation::CompletedWithoutVendor);
        }
        return UpdatePlan::Complete;
    }

    UpdatePlan::Transition
}

/// Plan the acknowledgment transition, yielding the assigned vendor.
///
/// Acknowledgment is distinct from the update path: it moves to
/// `acknowledged` from any prior status and is gated only on having a vendor
/// and not having been acknowledged before.
pub fn plan_acknowledge(po: &PurchaseOrder) -> Result<&VendorCode, TransitionViolation> {
    let vendor = po
        .vendor
        .as_ref()
        .ok_or(TransitionViolation::NoVendorOnAcknowledge)?;
    if po.acknowledgment_date.is_some() {
        return Err(TransitionViolation::AlreadyAcknowledged);
    }
    Ok(vendor)
}

/// Apply the unconditional field overwrites of an update to `po`.
///
/// Reassigns the vendor reference when the resolved vendor differs from the
/// current one; `issue_date` is stamped only when the new vendor is non-null
/// (clearing the vendor leaves it alone). Returns whether a reassignment
/// happened.
pub fn apply_field_overwrites(
    po: &mut PurchaseOrder,
    update: &PoUpdate,
    resolved_vendor: Option<&VendorCode>,
    now: DateTime<Utc>,
) -> bool {
    let reassigned = po.vendor.as_ref() != resolved_vendor;
    if reassigned {
        po.vendor = resolved_vendor.cloned();
        if po.vendor.is_some() {
            po.issue_date = Some(now);
        }
    }

    po.delivery_date = update.delivery_date;
    po.items = update.items.clone();
    po.quantity = update.quantity;

    reassigned
}
