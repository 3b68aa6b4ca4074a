//! B2 HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Incoming;

use ruststack_b2_model::context::RequestContext;
use ruststack_b2_model::error::B2Error;
use ruststack_b2_model::operations::B2Operation;

use crate::body::B2ResponseBody;
use crate::dispatch::{B2Handler, dispatch_operation};
use crate::request::{extract_auth_token, upload_input_from_headers};
use crate::response::{CONTENT_TYPE, REQUEST_ID_HEADER, error_to_response};
use crate::router::resolve_operation;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Configuration for the B2 HTTP service.
#[derive(Debug, Clone)]
pub struct B2HttpConfig {
    /// Maximum size of a JSON request body. Upload bodies are streamed and
    /// not subject to this limit.
    pub max_request_size: usize,
}

impl Default for B2HttpConfig {
    fn default() -> Self {
        Self {
            max_request_size: 1024 * 1024,
        }
    }
}

/// Hyper `Service` implementation for B2.
///
/// Wraps a [`B2Handler`] implementation and routes incoming HTTP requests to
/// the appropriate B2 operation handler.
#[derive(Debug)]
pub struct B2HttpService<H: B2Handler> {
    handler: Arc<H>,
    config: Arc<B2HttpConfig>,
}

impl<H: B2Handler> B2HttpService<H> {
    /// Create a new `B2HttpService`.
    pub fn new(handler: Arc<H>, config: B2HttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }

    /// Serve a single request with any body type.
    ///
    /// The hyper [`Service`](hyper::service::Service) impl delegates here;
    /// it is public so the full pipeline can be driven without a socket.
    pub async fn handle_request<B>(&self, req: http::Request<B>) -> http::Response<B2ResponseBody>
    where
        B: http_body::Body<Data = Bytes> + Send,
        B::Error: Into<BoxError>,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        let response =
            process_request(req, self.handler.as_ref(), &self.config, &request_id).await;
        add_common_headers(response, &request_id)
    }
}

impl<H: B2Handler> Clone for B2HttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: B2Handler> hyper::service::Service<http::Request<Incoming>> for B2HttpService<H> {
    type Response = http::Response<B2ResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let service = self.clone();
        Box::pin(async move { Ok(service.handle_request(req).await) })
    }
}

/// Process a single B2 HTTP request through the full pipeline.
async fn process_request<H, B>(
    req: http::Request<B>,
    handler: &H,
    config: &B2HttpConfig,
    request_id: &str,
) -> http::Response<B2ResponseBody>
where
    H: B2Handler,
    B: http_body::Body<Data = Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let (parts, incoming) = req.into_parts();

    // 1. Health probes bypass routing.
    if is_health_check(&parts.method, parts.uri.path()) {
        return health_check_response();
    }

    // 2. Route: the call name is the path segment after `/b2api/v1/`.
    let op = match resolve_operation(&parts.method, parts.uri.path()) {
        Ok(op) => op,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 3. Side channel: the auth token is carried, never verified.
    let ctx = RequestContext::new(request_id, extract_auth_token(&parts.headers));

    // 4. Body: uploads are drained and replaced by their header metadata.
    let body = if op == B2Operation::UploadFile {
        drain_upload(incoming, &parts.headers).await
    } else {
        collect_body(incoming, config.max_request_size).await
    };
    let body = match body {
        Ok(body) => body,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 5. Dispatch to handler.
    match dispatch_operation(handler, op, ctx, body).await {
        Ok(response) => response,
        Err(err) => error_to_response(&err, request_id),
    }
}

/// Collect a JSON request body into a single `Bytes` buffer, up to `limit` bytes.
async fn collect_body<B>(incoming: B, limit: usize) -> Result<Bytes, B2Error>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    Limited::new(incoming, limit)
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| {
            if e.is::<LengthLimitError>() {
                B2Error::bad_request(format!("Request body exceeds {limit} bytes"))
            } else {
                B2Error::internal_error(format!("Failed to read request body: {e}"))
            }
        })
}

/// Read an upload body to the end without retaining it, and return the
/// upload metadata encoded as JSON.
async fn drain_upload<B>(incoming: B, headers: &http::HeaderMap) -> Result<Bytes, B2Error>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let mut incoming = std::pin::pin!(incoming);
    let mut length: u64 = 0;

    while let Some(frame) = incoming.frame().await {
        let frame = frame.map_err(|e| {
            let e: BoxError = e.into();
            B2Error::internal_error(format!("Failed to read upload body: {e}"))
        })?;
        if let Some(data) = frame.data_ref() {
            length = length.saturating_add(u64::try_from(data.len()).unwrap_or(u64::MAX));
        }
    }

    let input = upload_input_from_headers(headers, length);
    tracing::debug!(
        file_name = %input.file_name,
        content_length = input.content_length,
        "discarded upload body"
    );

    serde_json::to_vec(&input)
        .map(Bytes::from)
        .map_err(|e| B2Error::internal_error(format!("Failed to encode upload metadata: {e}")))
}

/// Check if the request is a health check probe.
fn is_health_check(method: &http::Method, path: &str) -> bool {
    *method == http::Method::GET
        && (path == "/_localstack/health" || path == "/_health" || path == "/health")
}

/// Produce the health check response.
fn health_check_response() -> http::Response<B2ResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", "application/json")
        .body(B2ResponseBody::from_static(
            r#"{"services":{"b2":"running"}}"#,
        ))
        .expect("static health response should be valid")
}

/// Add common response headers to every B2 response.
fn add_common_headers(
    mut response: http::Response<B2ResponseBody>,
    request_id: &str,
) -> http::Response<B2ResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry(REQUEST_ID_HEADER).or_insert(hv);
    }

    headers
        .entry("content-type")
        .or_insert(http::HeaderValue::from_static(CONTENT_TYPE));

    headers.insert("server", http::HeaderValue::from_static("RustStack"));

    response
}
