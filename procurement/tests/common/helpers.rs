//! Test helpers for integration tests

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use procurement::{Clock, MemoryStore, ProcurementApi};

/// Settable clock for walking scenarios through time deterministically
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A fully wired API over a fresh in-memory store and a test clock
pub fn api_at(
    start: DateTime<Utc>,
) -> (
    Arc<MemoryStore>,
    Arc<TestClock>,
    ProcurementApi<MemoryStore, TestClock>,
) {
    shared::logging::init("procurement");
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(TestClock::new(start));
    let api = ProcurementApi::new(Arc::clone(&store), Arc::clone(&clock));
    (store, clock, api)
}
