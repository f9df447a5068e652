//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance scenarios run against the simulated page through
//! [`crate::test_harness::ScrollHarness`].

mod acceptance_lock;
mod acceptance_page_flags;
