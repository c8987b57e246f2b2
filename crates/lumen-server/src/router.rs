//! Axum router wiring.
//!
//! Every route accepts any method, and unmatched paths fall through to the
//! home handler, mirroring a catch-all `/` mount.

use axum::{routing::any, Router};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::home))
        .route("/random", any(handlers::random))
        .route("/metrics", any(ops::metrics))
        .fallback(handlers::home)
        .with_state(state)
}
