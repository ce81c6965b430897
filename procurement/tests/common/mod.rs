//! Shared test infrastructure for integration tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{api_at, TestClock};
