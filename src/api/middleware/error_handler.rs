//! JSON error bodies for requests that never reach a handler's happy path.
//!
//! Payload rejections and bare framework errors (unknown route, wrong
//! method, timeout) are all answered with an `ErrorResponse` carrying the
//! request ID.

use axum::{
    Json,
    extract::{Request, rejection::JsonRejection},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::RequestId;
use crate::api::dto::ErrorResponse;

/// Converts axum JSON rejection errors to ErrorResponse.
pub fn handle_json_rejection(rejection: JsonRejection, request_id: Option<&str>) -> Response {
    let (status, error_response) = match rejection {
        JsonRejection::JsonDataError(err) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                "INVALID_PAYLOAD",
                "Request body does not match the push webhook format",
            )
            .with_details(json!({ "error": err.body_text() })),
        ),
        JsonRejection::JsonSyntaxError(err) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("JSON_SYNTAX_ERROR", "JSON syntax error")
                .with_details(json!({ "error": err.body_text() })),
        ),
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                "MISSING_CONTENT_TYPE",
                "Missing or invalid Content-Type header",
            )
            .with_details(json!({ "expected": "application/json" })),
        ),
        JsonRejection::BytesRejection(_) => (
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorResponse::new("REQUEST_TOO_LARGE", "Request body could not be read"),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("JSON_ERROR", "Failed to parse JSON request"),
        ),
    };

    let error_response = match request_id {
        Some(id) => error_response.with_request_id(id),
        None => error_response,
    };

    (status, Json(error_response)).into_response()
}

/// Global error handling middleware that rewrites bodiless or plain-text
/// error responses (unknown route, wrong method, request timeout) into the
/// standard ErrorResponse format.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().map(|r| r.0.clone());
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (code, message) = match status {
        StatusCode::NOT_FOUND => ("NOT_FOUND", "The requested resource was not found"),
        StatusCode::METHOD_NOT_ALLOWED => (
            "METHOD_NOT_ALLOWED",
            "HTTP method not allowed for this endpoint",
        ),
        StatusCode::REQUEST_TIMEOUT => ("REQUEST_TIMEOUT", "Request timeout"),
        StatusCode::PAYLOAD_TOO_LARGE => ("PAYLOAD_TOO_LARGE", "Request payload too large"),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ("UNSUPPORTED_MEDIA_TYPE", "Unsupported media type"),
        s if s.is_server_error() => ("INTERNAL_SERVER_ERROR", "An internal server error occurred"),
        _ => ("BAD_REQUEST", "Bad request"),
    };

    let mut error_response = ErrorResponse::new(code, message);
    if let Some(id) = request_id.as_deref() {
        error_response = error_response.with_request_id(id);
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);
    let mut rewritten = (status, Json(error_response)).into_response();
    for (name, value) in parts.headers.iter() {
        if !rewritten.headers().contains_key(name) {
            rewritten.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rewritten
}
