//! B2 error types.
//!
//! B2 errors are JSON objects carrying the HTTP status, a short snake_case
//! code, and a human-readable message:
//!
//! ```json
//! {"status": 400, "code": "bad_request", "message": "bucketName is required"}
//! ```

use std::fmt;

/// Well-known B2 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum B2ErrorCode {
    /// Malformed request.
    #[default]
    BadRequest,
    /// Unknown API call.
    NotFound,
    /// The API call exists but not for this HTTP method.
    MethodNotAllowed,
    /// Unexpected server-side failure.
    InternalError,
}

impl B2ErrorCode {
    /// Returns the snake_case code used in the JSON `code` field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::InternalError => "internal_error",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::BadRequest => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for B2ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A B2 error response.
#[derive(Debug)]
pub struct B2Error {
    /// The error code.
    pub code: B2ErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for B2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B2Error({}): {}", self.code, self.message)
    }
}

impl std::error::Error for B2Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl B2Error {
    /// Create a new `B2Error` with a custom message.
    #[must_use]
    pub fn with_message(code: B2ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // -- Convenience constructors --

    /// Malformed request.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_message(B2ErrorCode::BadRequest, message)
    }

    /// Internal server error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(B2ErrorCode::InternalError, message)
    }

    /// Unknown API path.
    #[must_use]
    pub fn unknown_operation(path: &str) -> Self {
        Self::with_message(
            B2ErrorCode::NotFound,
            format!("Unsupported API call: {path}"),
        )
    }

    /// Known API call invoked with the wrong HTTP method.
    #[must_use]
    pub fn method_not_allowed(method: &http::Method, op: &str) -> Self {
        Self::with_message(
            B2ErrorCode::MethodNotAllowed,
            format!("{op} does not support method {method}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_codes_to_status() {
        assert_eq!(
            B2ErrorCode::BadRequest.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            B2ErrorCode::MethodNotAllowed.default_status_code(),
            http::StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            B2ErrorCode::InternalError.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_should_expose_source() {
        let io = std::io::Error::other("disk on fire");
        let err = B2Error::internal_error("boom").with_source(io);
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn test_should_format_display() {
        let err = B2Error::unknown_operation("/b2api/v1/b2_nope");
        assert_eq!(
            err.to_string(),
            "B2Error(not_found): Unsupported API call: /b2api/v1/b2_nope"
        );
    }
}
