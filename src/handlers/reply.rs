//! Shared response helpers.
//!
//! Every failure this API reports is a JSON object with a single `error`
//! string field, paired with a 400, 404, or 500 status.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::api::ErrorResponse;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 400 with an `error` body.
pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// 404 with an `error` body.
pub fn not_found(message: impl Into<String>) -> Response {
    error_response(StatusCode::NOT_FOUND, message)
}

/// 500 with an `error` body.
pub fn internal_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// 200 with a JSON content type and no body.
///
/// Reproduces serializing an absent value: the status and content type say
/// JSON, the body is empty. Used when a validated id resolves to no post.
pub fn empty_json_ok() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        String::new(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_helpers_set_status() {
        assert_eq!(bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            internal_error("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn empty_json_ok_has_json_content_type() {
        let response = empty_json_ok();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
