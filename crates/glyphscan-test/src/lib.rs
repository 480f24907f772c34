//! glyphscan-test - Regression test framework for glyphscan
//!
//! Every `tests/*_reg.rs` file in the workspace is driven by [`RegParams`]:
//! checks record failures instead of panicking and the test asserts on
//! [`RegParams::cleanup`] at the end.
//!
//! # Usage
//!
//! ```ignore
//! use glyphscan_test::RegParams;
//!
//! let mut rp = RegParams::new("reconstruct");
//! rp.compare_strings("HI\nLO", &text);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter for the log output of the crates under test

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static LOGGING: Once = Once::new();

/// Install a `tracing` subscriber writing to the test output.
///
/// Honors `RUST_LOG` and defaults to `warn`. Safe to call repeatedly.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // another subscriber may already be installed by the test binary
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}
