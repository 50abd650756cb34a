//! Backend test support utilities
//!
//! Shared helpers for backend tests: unified logging initialization,
//! Problem Details assertions, and unique test data generation.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
