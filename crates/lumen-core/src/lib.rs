//! Lumen core: metric instruments, the registry that owns them, and the
//! Prometheus text exposition they render to.
//!
//! This crate carries no HTTP or runtime dependencies so the registry can be
//! exercised in isolation and shared by any front end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Registration problems surface as `LumenError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{LumenError, Result};
