//! Lumen server library entry.
//!
//! Wires config, the shared metric set, the request handlers, and the
//! background sampler into an axum app. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod random;
pub mod router;
pub mod sampler;
