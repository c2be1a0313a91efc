//! Unified test logging initialization
//!
//! One initializer shared by the backend's unit tests and every integration
//! test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn,sqlx=error,sea_orm_migration=error";

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter is read in this order:
///
/// 1. `TEST_LOG`
/// 2. `RUST_LOG`
/// 3. [`DEFAULT_FILTER`]
///
/// Output goes through `with_test_writer()` so cargo captures it per test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
