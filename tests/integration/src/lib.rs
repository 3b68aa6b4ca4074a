//! Integration tests for the RustStack B2 server.
//!
//! These tests require a running server at `localhost:4566` (override with
//! `B2_ENDPOINT_URL`). They are marked `#[ignore]` so they don't run during
//! normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p ruststack-b2-integration -- --ignored
//! ```

use std::sync::Once;

use anyhow::{Context, Result};
use serde_json::Value;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
#[must_use]
pub fn endpoint_url() -> String {
    std::env::var("B2_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// Create an HTTP client for talking to the server.
#[must_use]
pub fn http_client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// POST a JSON body to `/b2api/v1/{call}` and return the status and decoded body.
pub async fn call(client: &reqwest::Client, call: &str, body: &Value) -> Result<(u16, Value)> {
    let url = format!("{}/b2api/v1/{call}", endpoint_url());
    let resp = client
        .post(&url)
        .header("authorization", "test-token")
        .json(body)
        .send()
        .await
        .with_context(|| format!("POST {url}"))?;
    let status = resp.status().as_u16();
    let json = resp.json::<Value>().await.context("decode response body")?;
    tracing::debug!(call, status, "b2 call finished");
    Ok((status, json))
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a bucket and return its server-assigned id.
pub async fn create_test_bucket(client: &reqwest::Client, prefix: &str) -> Result<(String, String)> {
    let name = test_bucket_name(prefix);
    let (status, json) = call(
        client,
        "b2_create_bucket",
        &serde_json::json!({ "bucketName": name, "bucketType": "allPrivate" }),
    )
    .await?;
    anyhow::ensure!(status == 200, "create bucket returned {status}: {json}");
    let id = json["bucketId"]
        .as_str()
        .context("bucketId missing from response")?
        .to_owned();
    Ok((name, id))
}

mod test_b2;
