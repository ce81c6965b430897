//! Production wall-clock implementation

use chrono::{DateTime, Utc};

use crate::traits::Clock;

/// Real clock backed by `Utc::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
