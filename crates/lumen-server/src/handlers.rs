//! Request handlers for `/` and `/random`.
//!
//! Each call records exactly one `app_requests_total` increment and emits one
//! log event.

use axum::extract::State;

use crate::app_state::AppState;
use crate::error::HandlerError;
use crate::obs::metrics::labels::{ERROR, HOME, RANDOM, SUCCESS};

pub const HOME_BODY: &str = "Hello! This is our observable app";
pub const RANDOM_SUCCESS_BODY: &str = "Success!";

/// `/random` succeeds when the draw is below this.
pub const SUCCESS_THRESHOLD: f64 = 0.5;

pub async fn home(State(app): State<AppState>) -> &'static str {
    app.metrics().requests.inc([HOME, SUCCESS]);
    tracing::info!(endpoint = HOME, "Homepage accessed");
    HOME_BODY
}

pub async fn random(State(app): State<AppState>) -> Result<&'static str, HandlerError> {
    let draw = app.random().unit();
    if draw < SUCCESS_THRESHOLD {
        app.metrics().requests.inc([RANDOM, SUCCESS]);
        tracing::info!(endpoint = RANDOM, draw, "Random endpoint success");
        Ok(RANDOM_SUCCESS_BODY)
    } else {
        app.metrics().requests.inc([RANDOM, ERROR]);
        tracing::error!(endpoint = RANDOM, draw, "Random endpoint failed");
        Err(HandlerError::RandomFailure)
    }
}
