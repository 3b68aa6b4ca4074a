//! B2 handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use ruststack_b2_model::context::RequestContext;
use ruststack_b2_model::error::B2Error;
use ruststack_b2_model::operations::B2Operation;

use crate::body::B2ResponseBody;

/// Boxed future returned by [`B2Handler::handle_operation`].
pub type B2HandlerFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<B2ResponseBody>, B2Error>> + Send>>;

/// Trait that the B2 business logic provider must implement.
///
/// The handler receives the resolved operation, the per-request context and
/// the JSON request body, and returns a complete HTTP response. For
/// `b2_upload_file` the body is the JSON form of the upload metadata; the
/// file content itself never crosses this boundary.
pub trait B2Handler: Send + Sync + 'static {
    /// Handle a B2 operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: B2Operation,
        ctx: RequestContext,
        body: Bytes,
    ) -> B2HandlerFuture;
}

/// Dispatch a B2 operation to the handler.
pub async fn dispatch_operation<H: B2Handler>(
    handler: &H,
    op: B2Operation,
    ctx: RequestContext,
    body: Bytes,
) -> Result<http::Response<B2ResponseBody>, B2Error> {
    tracing::debug!(
        operation = %op,
        request_id = %ctx.request_id,
        has_token = ctx.has_token(),
        "dispatching B2 operation"
    );
    handler.handle_operation(op, ctx, body).await
}

/// Default handler that returns an error for all operations.
#[derive(Debug, Clone, Default)]
pub struct NotImplementedHandler;

impl B2Handler for NotImplementedHandler {
    fn handle_operation(
        &self,
        op: B2Operation,
        _ctx: RequestContext,
        _body: Bytes,
    ) -> B2HandlerFuture {
        Box::pin(async move { Err(B2Error::unknown_operation(op.as_str())) })
    }
}
