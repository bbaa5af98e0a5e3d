//! Tracing/logging setup shared by cashpoint binaries.

/// Initialize process-wide logging with JSON output.
///
/// The `cashpoint` binary calls this when no `--log-format` is given.
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

/// Initialize process-wide logging with an explicit output format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::LogFormat;
