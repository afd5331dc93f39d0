//! Test logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
const QUIET_FILTER: &str = "warn";

/// Install a test-writer subscriber once per test binary.
///
/// Idempotent and never panics. The filter comes from `TEST_LOG`, then
/// `RUST_LOG`, then [`QUIET_FILTER`]:
///
/// ```bash
/// TEST_LOG=tourney_backend=debug cargo test -p tourney-backend
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(QUIET_FILTER));

        // with_test_writer keeps output under libtest capture.
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
