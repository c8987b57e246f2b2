//! HTTP-facing handler outcomes.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// Deliberate outcome of `/random`; not a fault.
    #[error("Random failure!")]
    RandomFailure,
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::RandomFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Plain-text error contract: message plus trailing newline, nosniff.
impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let mut resp = (self.status(), format!("{self}\n")).into_response();
        let headers = resp.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_failure_maps_to_500_plain_text() {
        let resp = HandlerError::RandomFailure.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(&b"text/plain; charset=utf-8"[..])
        );
        assert_eq!(
            resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).map(|v| v.as_bytes()),
            Some(&b"nosniff"[..])
        );
    }
}
