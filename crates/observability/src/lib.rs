//! Tracing and logging setup shared by binaries and test harnesses.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&LogConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::{LogConfig, LogFormat};
