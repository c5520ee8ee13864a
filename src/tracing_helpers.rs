//! Logging macros.
//!
//! With the `tracing` feature these forward to the `tracing` crate. Without it they expand to
//! nothing, so call sites cost nothing in normal builds.
//!
//! ```bash
//! RUST_LOG=redblack=trace cargo test --features tracing
//! ```

#![allow(unused_macros, unused_imports)]

/// Per-rotation and per-fixup-case events.
#[cfg(feature = "tracing")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Outcome of public mutations.
#[cfg(feature = "tracing")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
pub(crate) use trace_log;
