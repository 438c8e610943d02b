//! Outcome → HTTP response mapping.
//!
//! Every failed dispatch is reported as `400 Bad Request` carrying the first
//! error, whatever its kind.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use innoclinic_core::Outcome;

/// `200 OK` with the value, or `400` with the first error.
pub fn ok<T: Serialize>(outcome: Outcome<T>) -> Response {
    match outcome {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(errors) => bad_request(errors),
    }
}

/// `204 No Content` with an empty body, or `400` with the first error.
pub fn no_content<T>(outcome: Outcome<T>) -> Response {
    match outcome {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(errors) => bad_request(errors),
    }
}

fn bad_request(errors: innoclinic_core::Errors) -> Response {
    (StatusCode::BAD_REQUEST, Json(errors.into_first())).into_response()
}

/// Error body for rejections raised by the pipeline itself (auth, redirects).
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
