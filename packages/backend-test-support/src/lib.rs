//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: unified logging
//! initialization and unique test data.

pub mod logging;
pub mod unique_helpers;

pub use unique_helpers::{unique_name, unique_str};
