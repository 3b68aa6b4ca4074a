//! B2 input types.
//!
//! `b2_create_bucket` takes a [`Bucket`](crate::types::Bucket) directly, so it
//! has no dedicated input struct. Every input deserializes from an empty JSON
//! object, which lets the transport treat an empty body as the default input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Input for `b2_authorize_account`. Credentials travel in the
/// `Authorization` header, so the body carries nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeAccountInput {}

/// Input for `b2_list_buckets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBucketsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
}

/// Input for `b2_get_upload_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUploadUrlInput {
    /// Bucket reference. Not validated.
    #[serde(default)]
    pub bucket_id: String,
}

/// Input for `b2_upload_file`.
///
/// On the wire this metadata arrives in request headers alongside the raw
/// file content; the transport lifts it into this struct and drops the bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileInput {
    #[serde(default)]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_length: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_sha1: Option<String>,
    /// `X-Bz-Info-*` headers, keyed by the suffix.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub file_info: BTreeMap<String, String>,
}
