//! Acknowledgment handler tests

use std::sync::Arc;

use chrono::Duration;
use shared::{PoNumber, PoStatus, VendorCode};

use super::common::{base_time, frozen_clock, po, seed, vendor};
use crate::core::transition::TransitionViolation;
use crate::error::ProcurementError;
use crate::services::{AcknowledgmentHandler, MemoryStore};
use crate::traits::ProcurementStore;

#[tokio::test]
async fn test_acknowledge_stamps_status_and_date() {
    let store = Arc::new(MemoryStore::new());
    let mut existing = po("PO1", Some("V1"));
    existing.issue_date = Some(base_time() - Duration::seconds(10));
    seed(&store, &[vendor("V1")], &[existing]).await;
    let handler = AcknowledgmentHandler::new(Arc::clone(&store), frozen_clock(base_time()));

    let acked = handler.acknowledge(&PoNumber::new("PO1")).await.unwrap();

    assert_eq!(acked.status, PoStatus::Acknowledged);
    assert_eq!(acked.acknowledgment_date, Some(base_time()));

    let v1 = store.get_vendor(&VendorCode::new("V1")).await.unwrap().unwrap();
    assert_eq!(v1.average_response_time, Some(10.0));
}

#[tokio::test]
async fn test_response_time_averages_across_all_acknowledged_pos() {
    // First PO acknowledged 10s after issuing, second issued 20s before the
    // acknowledgment call: the average covers both, not just the latest.
    let store = Arc::new(MemoryStore::new());
    let mut first = po("PO1", Some("V1"));
    first.status = PoStatus::Acknowledged;
    first.issue_date = Some(base_time() - Duration::seconds(40));
    first.acknowledgment_date = Some(base_time() - Duration::seconds(30));
    let mut second = po("PO2", Some("V1"));
    second.issue_date = Some(base_time() - Duration::seconds(20));
    seed(&store, &[vendor("V1")], &[first, second]).await;
    let handler = AcknowledgmentHandler::new(Arc::clone(&store), frozen_clock(base_time()));

    handler.acknowledge(&PoNumber::new("PO2")).await.unwrap();

    let v1 = store.get_vendor(&VendorCode::new("V1")).await.unwrap().unwrap();
    assert_eq!(v1.average_response_time, Some(15.0));
}

#[tokio::test]
async fn test_acknowledge_without_vendor_rejected() {
    let store = Arc::new(MemoryStore::new());
    seed(&store, &[], &[po("PO1", None)]).await;
    let handler = AcknowledgmentHandler::new(Arc::clone(&store), frozen_clock(base_time()));

    let err = handler.acknowledge(&PoNumber::new("PO1")).await.unwrap_err();

    assert!(matches!(
        err,
        ProcurementError::InvalidTransition(TransitionViolation::NoVendorOnAcknowledge)
    ));
    let stored = store.get_po(&PoNumber::new("PO1")).await.unwrap().unwrap();
    assert_eq!(stored.acknowledgment_date, None);
    assert_eq!(stored.status, PoStatus::Ordered);
}

#[tokio::test]
async fn test_second_acknowledgment_always_rejected() {
    let store = Arc::new(MemoryStore::new());
    let mut existing = po("PO1", Some("V1"));
    existing.issue_date = Some(base_time() - Duration::seconds(10));
    seed(&store, &[vendor("V1")], &[existing]).await;
    let handler = AcknowledgmentHandler::new(Arc::clone(&store), frozen_clock(base_time()));

    handler.acknowledge(&PoNumber::new("PO1")).await.unwrap();
    let err = handler.acknowledge(&PoNumber::new("PO1")).await.unwrap_err();

    assert!(matches!(
        err,
        ProcurementError::InvalidTransition(TransitionViolation::AlreadyAcknowledged)
    ));
    // The first stamp survives untouched.
    let stored = store.get_po(&PoNumber::new("PO1")).await.unwrap().unwrap();
    assert_eq!(stored.acknowledgment_date, Some(base_time()));
}

#[tokio::test]
async fn test_acknowledge_overwrites_any_prior_status() {
    // No guard against acknowledging a completed order beyond the
    // acknowledgment-date check.
    let store = Arc::new(MemoryStore::new());
    let mut existing = po("PO1", Some("V1"));
    existing.status = PoStatus::Completed;
    seed(&store, &[vendor("V1")], &[existing]).await;
    let handler = AcknowledgmentHandler::new(Arc::clone(&store), frozen_clock(base_time()));

    let acked = handler.acknowledge(&PoNumber::new("PO1")).await.unwrap();
    assert_eq!(acked.status, PoStatus::Acknowledged);
}

#[tokio::test]
async fn test_acknowledge_without_issue_date_clears_response_time() {
    // A PO acknowledged without ever having been issued contributes no
    // duration; with no qualifying pair the aggregate stays unset.
    let store = Arc::new(MemoryStore::new());
    seed(&store, &[vendor("V1")], &[po("PO1", Some("V1"))]).await;
    let handler = AcknowledgmentHandler::new(Arc::clone(&store), frozen_clock(base_time()));

    handler.acknowledge(&PoNumber::new("PO1")).await.unwrap();

    let v1 = store.get_vendor(&VendorCode::new("V1")).await.unwrap().unwrap();
    assert_eq!(v1.average_response_time, None);
}

#[tokio::test]
async fn test_acknowledge_unknown_po_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let handler = AcknowledgmentHandler::new(Arc::clone(&store), frozen_clock(base_time()));

    let err = handler.acknowledge(&PoNumber::new("ghost")).await.unwrap_err();
    assert!(matches!(
        err,
        ProcurementError::NotFound {
            entity: "purchase order",
            ..
        }
    ));
}
