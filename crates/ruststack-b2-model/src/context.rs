//! Per-request context handed from the transport to the business logic.

/// Side-channel data for a single B2 call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Request identifier echoed in the response headers.
    pub request_id: String,
    /// Raw value of the `Authorization` header, if present and readable.
    pub auth_token: Option<String>,
}

impl RequestContext {
    /// Create a context for the given request id and optional token.
    #[must_use]
    pub fn new(request_id: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            request_id: request_id.into(),
            auth_token,
        }
    }

    /// Whether the caller presented any token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.auth_token.is_some()
    }
}
