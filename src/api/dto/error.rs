//! Error response DTOs.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "code": "INVALID_PAYLOAD",
    "message": "Request body does not match the push webhook format",
    "details": { "error": "missing field `commits`" },
    "request_id": "6f1c0b7e-3c1a-4f2e-9d7a-2b9f4a8c1d00"
}))]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let json = serde_json::to_value(ErrorResponse::new("BAD_REQUEST", "nope")).unwrap();
        assert_eq!(json, json!({"code": "BAD_REQUEST", "message": "nope"}));
    }

    #[test]
    fn test_details_and_request_id() {
        let response = ErrorResponse::new("INVALID_PAYLOAD", "bad body")
            .with_details(json!({ "error": "missing field `commits`" }))
            .with_request_id("req-1");

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["details"]["error"], "missing field `commits`");
        assert_eq!(json["request_id"], "req-1");
    }
}
