//! heatmap-test - Regression test framework for heatmap
//!
//! This crate provides a golden-file regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (inspection only)
//!
//! It also builds the synthetic images the tests run on (see [`images`]).
//!
//! # Usage
//!
//! ```ignore
//! use heatmap_test::{RegParams, images};
//!
//! let mut rp = RegParams::new("pseudocolor");
//! let ramp = images::gradient_rgba(256, 1).unwrap();
//! rp.compare_values(1024.0, ramp.data().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//! - `RUST_LOG`: Log filter for test output (default `warn`)

mod error;
pub mod images;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::path::{Path, PathBuf};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber, once per test binary.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another subscriber may already be installed by the test binary
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}

/// Get the path to the workspace root
fn workspace_root() -> PathBuf {
    // heatmap-test is at crates/heatmap-test, so go up two directories
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Get the path to the golden files directory
pub fn golden_dir() -> PathBuf {
    workspace_root().join("tests/golden")
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> PathBuf {
    workspace_root().join("tests/regout")
}
