//! B2 handler implementation bridging HTTP to business logic.

use std::sync::Arc;

use bytes::Bytes;

use ruststack_b2_http::body::B2ResponseBody;
use ruststack_b2_http::dispatch::{B2Handler, B2HandlerFuture};
use ruststack_b2_http::response::json_response;
use ruststack_b2_model::context::RequestContext;
use ruststack_b2_model::error::B2Error;
use ruststack_b2_model::input::AuthorizeAccountInput;
use ruststack_b2_model::operations::B2Operation;

use crate::provider::RustStackB2;

/// Handler that bridges the HTTP layer to the B2 provider.
#[derive(Debug)]
pub struct RustStackB2Handler {
    provider: Arc<RustStackB2>,
}

impl RustStackB2Handler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<RustStackB2>) -> Self {
        Self { provider }
    }
}

impl B2Handler for RustStackB2Handler {
    fn handle_operation(
        &self,
        op: B2Operation,
        ctx: RequestContext,
        body: Bytes,
    ) -> B2HandlerFuture {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), op, &ctx, &body) })
    }
}

/// Dispatch a B2 operation to the appropriate provider method.
fn dispatch(
    provider: &RustStackB2,
    op: B2Operation,
    ctx: &RequestContext,
    body: &[u8],
) -> Result<http::Response<B2ResponseBody>, B2Error> {
    match op {
        B2Operation::AuthorizeAccount => {
            // The body carries nothing for this call; GET requests have none.
            let output =
                provider.handle_authorize_account(ctx, AuthorizeAccountInput::default())?;
            serialize(&output, &ctx.request_id)
        }
        B2Operation::ListBuckets => {
            // Filters are not applied, so an unreadable one is harmless.
            let input = deserialize(body).unwrap_or_default();
            let output = provider.handle_list_buckets(input)?;
            serialize(&output, &ctx.request_id)
        }
        B2Operation::CreateBucket => {
            let input = deserialize(body)?;
            let output = provider.handle_create_bucket(input)?;
            serialize(&output, &ctx.request_id)
        }
        B2Operation::GetUploadUrl => {
            // Any bucket reference is accepted, even an unreadable one.
            let input = deserialize(body).unwrap_or_default();
            let output = provider.handle_get_upload_url(input)?;
            serialize(&output, &ctx.request_id)
        }
        B2Operation::UploadFile => {
            let input = deserialize(body).unwrap_or_default();
            let output = provider.handle_upload_file(input)?;
            serialize(&output, &ctx.request_id)
        }
    }
}

/// Deserialize a JSON request body into the input type. An empty body
/// yields the default input.
fn deserialize<T: serde::de::DeserializeOwned + Default>(body: &[u8]) -> Result<T, B2Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        B2Error::bad_request(format!("Failed to deserialize request body: {e}")).with_source(e)
    })
}

/// Serialize an output type into a JSON HTTP response.
fn serialize<T: serde::Serialize>(
    output: &T,
    request_id: &str,
) -> Result<http::Response<B2ResponseBody>, B2Error> {
    let json = serde_json::to_vec(output)
        .map_err(|e| B2Error::internal_error(format!("Failed to serialize response: {e}")))?;
    Ok(json_response(json, request_id))
}
