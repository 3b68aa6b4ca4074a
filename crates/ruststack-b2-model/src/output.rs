//! B2 output types.
//!
//! `b2_create_bucket` returns a [`Bucket`] directly, so it has no dedicated
//! output struct.

use serde::{Deserialize, Serialize};

use crate::types::Bucket;

/// Output for `b2_authorize_account`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeAccountOutput {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authorization_token: String,
    /// Base URL for every subsequent API call.
    pub api_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_part_size: Option<u64>,
}

/// Output for `b2_list_buckets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBucketsOutput {
    /// Buckets in unspecified order.
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

/// Output for `b2_get_upload_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUploadUrlOutput {
    pub authorization_token: String,
    pub upload_url: String,
    pub bucket_id: String,
}

/// Output for `b2_upload_file`. Always serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFileOutput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_upload_output_as_empty_object() {
        let json = serde_json::to_string(&UploadFileOutput::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_should_serialize_authorize_output_in_camel_case() {
        let out = AuthorizeAccountOutput {
            api_url: "http://x".to_owned(),
            ..Default::default()
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value, serde_json::json!({"apiUrl": "http://x"}));
    }
}
