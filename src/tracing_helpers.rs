//! Feature-gated log macros for tree internals.
//!
//! With the `tracing` feature each macro forwards to the matching `tracing`
//! macro. Without it the macros expand to nothing, so the default build
//! carries no logging code at all.
//!
//! Events by level:
//!
//! | Level | Target | Event |
//! |-------|--------|-------|
//! | span  | `insert`, `delete` | one `debug` span per call, recording `key` |
//! | trace | `rotate` | `node`, `pivot`, `dir` of every rotation |
//! | trace | `insert_fixup` | `recolor`, `inner child, rotate parent`, `rotate grandparent` |
//! | trace | `delete_fixup` | `red sibling`, `black sibling, black children`, `near child red, rotate sibling`, `far child red, rotate parent` |
//! | trace | `search` | `NOT_FOUND` misses |
//! | debug | `insert` / `delete` | duplicate rejected, key could not be deleted |
//! | debug | `teardown` | number of nodes `released` by `clear` or drop |
//! | error | `check_invariants` | the violation, right before the panic |
//!
//! ```bash
//! RUST_LOG=redblack=trace cargo test --features tracing
//! ```

#![allow(unused_macros, unused_imports)]

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

/// Invariant failures only; every call is followed by a panic.
#[cfg(feature = "tracing")]
macro_rules! error_log {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! error_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
pub(crate) use error_log;
pub(crate) use trace_log;
