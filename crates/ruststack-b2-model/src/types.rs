//! Shared B2 data types.
//!
//! Field names follow the B2 v1 JSON API (`camelCase`). Empty collections and
//! unset optionals are omitted on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Bucket visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketType {
    /// Anybody may download files.
    AllPublic,
    /// Downloads require an authorization token.
    AllPrivate,
    /// Bucket holding snapshot archives.
    Snapshot,
}

/// A lifecycle rule controlling automatic hiding and deletion of file versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleRule {
    /// Days after a version is hidden before it is deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_from_hiding_to_deleting: Option<u32>,
    /// Days after upload before a version is hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_from_uploading_to_hiding: Option<u32>,
    /// File name prefix the rule applies to.
    #[serde(default)]
    pub file_name_prefix: String,
}

/// A CORS rule attached to a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsRule {
    pub cors_rule_name: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub allowed_operations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_headers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expose_headers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<u32>,
}

/// A bucket record, as accepted by `b2_create_bucket` and returned by
/// `b2_create_bucket` and `b2_list_buckets`.
///
/// `bucket_id` is assigned by the server; any value supplied by the caller
/// is overwritten on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Owning account.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_id: String,
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bucket_id: String,
    /// Bucket name.
    #[serde(default)]
    pub bucket_name: String,
    /// Visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_type: Option<BucketType>,
    /// Arbitrary user metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bucket_info: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cors_rules: Vec<CorsRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lifecycle_rules: Vec<LifecycleRule>,
    /// Revision counter as reported by B2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_b2_bucket_json() {
        let json = r#"{
            "accountId": "acct",
            "bucketName": "photos",
            "bucketType": "allPrivate",
            "bucketInfo": {"owner": "me"},
            "lifecycleRules": [
                {"daysFromHidingToDeleting": 30, "fileNamePrefix": "logs/"}
            ]
        }"#;
        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.bucket_name, "photos");
        assert_eq!(bucket.bucket_type, Some(BucketType::AllPrivate));
        assert_eq!(bucket.bucket_info.get("owner").map(String::as_str), Some("me"));
        assert_eq!(
            bucket.lifecycle_rules[0].days_from_hiding_to_deleting,
            Some(30)
        );
        assert!(bucket.bucket_id.is_empty());
    }

    #[test]
    fn test_should_omit_empty_fields() {
        let bucket = Bucket {
            bucket_name: "docs".to_owned(),
            bucket_id: "1".to_owned(),
            ..Default::default()
        };
        let value = serde_json::to_value(&bucket).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"bucketName": "docs", "bucketId": "1"})
        );
    }

    #[test]
    fn test_should_reject_unknown_bucket_type() {
        let json = r#"{"bucketName": "x", "bucketType": "sometimesPublic"}"#;
        assert!(serde_json::from_str::<Bucket>(json).is_err());
    }
}
