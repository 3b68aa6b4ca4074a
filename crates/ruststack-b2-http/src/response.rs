//! B2 response serialization and error formatting.

use ruststack_b2_model::error::B2Error;

use crate::body::B2ResponseBody;

/// Content type for B2 JSON responses.
pub const CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Header carrying the per-request identifier.
pub const REQUEST_ID_HEADER: &str = "x-bz-request-id";

/// Serialize a B2 error into a JSON response body.
///
/// ```json
/// {"status": 404, "code": "not_found", "message": "Unsupported API call: ..."}
/// ```
#[must_use]
pub fn error_to_json(error: &B2Error) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "status": error.status_code.as_u16(),
        "code": error.code.as_str(),
        "message": error.message,
    }))
    .expect("JSON serialization of error cannot fail")
}

/// Convert a `B2Error` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(error: &B2Error, request_id: &str) -> http::Response<B2ResponseBody> {
    if error.status_code.is_server_error() {
        tracing::error!(request_id, error = %error, "B2 request failed");
    } else {
        tracing::debug!(request_id, error = %error, "B2 request rejected");
    }

    http::Response::builder()
        .status(error.status_code)
        .header("content-type", CONTENT_TYPE)
        .header(REQUEST_ID_HEADER, request_id)
        .body(B2ResponseBody::from_bytes(error_to_json(error)))
        .expect("valid error response")
}

/// Build a success response from JSON bytes.
#[must_use]
pub fn json_response(json: Vec<u8>, request_id: &str) -> http::Response<B2ResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .header(REQUEST_ID_HEADER, request_id)
        .body(B2ResponseBody::from_bytes(json))
        .expect("valid JSON response")
}
