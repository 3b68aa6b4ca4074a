//! B2 operation enum.

use std::fmt;

/// All supported B2 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum B2Operation {
    /// Exchange account credentials for an API URL and token.
    AuthorizeAccount,
    /// List all buckets.
    ListBuckets,
    /// Create a new bucket.
    CreateBucket,
    /// Obtain an upload URL and token for a bucket.
    GetUploadUrl,
    /// Upload a file to a previously issued upload URL.
    UploadFile,
}

impl B2Operation {
    /// Returns the B2 API call name (the last path segment, without prefix).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizeAccount => "b2_authorize_account",
            Self::ListBuckets => "b2_list_buckets",
            Self::CreateBucket => "b2_create_bucket",
            Self::GetUploadUrl => "b2_get_upload_url",
            Self::UploadFile => "b2_upload_file",
        }
    }

    /// Parse a B2 API call name into a `B2Operation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "b2_authorize_account" => Some(Self::AuthorizeAccount),
            "b2_list_buckets" => Some(Self::ListBuckets),
            "b2_create_bucket" => Some(Self::CreateBucket),
            "b2_get_upload_url" => Some(Self::GetUploadUrl),
            "b2_upload_file" => Some(Self::UploadFile),
            _ => None,
        }
    }

    /// Whether the operation accepts a `GET` request in addition to `POST`.
    #[must_use]
    pub fn allows_get(&self) -> bool {
        matches!(self, Self::AuthorizeAccount)
    }
}

impl fmt::Display for B2Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
