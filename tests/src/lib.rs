//! # Tollgate Test Suite
//!
//! Unified test crate for flows that span several engine modules:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs       # End-to-end transfer pipeline scenarios
//!     └── governance.rs  # Config replacement and flag administration
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tollgate-tests
//! cargo test -p tollgate-tests integration::flows
//! ```


/// Install a test-friendly tracing subscriber. Safe to call from every test;
/// only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
