//! B2 provider implementing the supported calls.

use std::sync::Arc;

use ruststack_b2_model::context::RequestContext;
use ruststack_b2_model::error::B2Error;
use ruststack_b2_model::input::{
    AuthorizeAccountInput, GetUploadUrlInput, ListBucketsInput, UploadFileInput,
};
use ruststack_b2_model::output::{
    AuthorizeAccountOutput, GetUploadUrlOutput, ListBucketsOutput, UploadFileOutput,
};
use ruststack_b2_model::types::Bucket;

use crate::config::B2Config;
use crate::error::registry_error_to_b2;
use crate::registry::BucketRegistry;

/// Path segment naming the single upload target handed out by
/// `b2_get_upload_url`.
pub const UPLOAD_TARGET: &str = "uploader";

/// Smallest part size reported to clients (5 MB, as B2 does).
pub const MINIMUM_PART_SIZE: u64 = 5_000_000;

/// Main B2 provider.
#[derive(Debug)]
pub struct RustStackB2 {
    /// Bucket registry shared by every call.
    pub registry: Arc<BucketRegistry<Bucket>>,
    /// Configuration.
    pub config: Arc<B2Config>,
}

impl RustStackB2 {
    /// Create a provider with a fresh, empty registry.
    #[must_use]
    pub fn new(config: B2Config) -> Self {
        let registry = Arc::new(BucketRegistry::new(config.record_encoding));
        Self::with_registry(config, registry)
    }

    /// Create a provider on top of an existing registry.
    #[must_use]
    pub fn with_registry(config: B2Config, registry: Arc<BucketRegistry<Bucket>>) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }

    /// Reset all state (for testing).
    pub fn reset(&self) {
        self.registry.reset();
    }

    /// The configured root URL without a trailing slash.
    fn root(&self) -> &str {
        self.config.root_url.trim_end_matches('/')
    }
}

impl RustStackB2 {
    /// Handle `b2_authorize_account`.
    ///
    /// Credentials are not checked; every caller gets the same answer.
    #[allow(clippy::needless_pass_by_value, clippy::unnecessary_wraps)]
    pub fn handle_authorize_account(
        &self,
        ctx: &RequestContext,
        _input: AuthorizeAccountInput,
    ) -> Result<AuthorizeAccountOutput, B2Error> {
        tracing::debug!(has_token = ctx.has_token(), "authorizing account");
        Ok(AuthorizeAccountOutput {
            account_id: self.config.account_id.clone(),
            authorization_token: self.config.auth_token.clone(),
            api_url: self.config.root_url.clone(),
            download_url: self.config.root_url.clone(),
            minimum_part_size: Some(MINIMUM_PART_SIZE),
        })
    }

    /// Handle `b2_list_buckets`. Filters in the input are ignored.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_buckets(
        &self,
        _input: ListBucketsInput,
    ) -> Result<ListBucketsOutput, B2Error> {
        let buckets = self.registry.list().map_err(registry_error_to_b2)?;
        Ok(ListBucketsOutput { buckets })
    }

    /// Handle `b2_create_bucket`.
    pub fn handle_create_bucket(&self, input: Bucket) -> Result<Bucket, B2Error> {
        let bucket = self.registry.create(input).map_err(registry_error_to_b2)?;
        tracing::info!(
            bucket_id = %bucket.bucket_id,
            bucket_name = %bucket.bucket_name,
            "created bucket"
        );
        Ok(bucket)
    }

    /// Handle `b2_get_upload_url`.
    ///
    /// The bucket reference is echoed back without checking that it exists.
    #[allow(clippy::unnecessary_wraps)]
    pub fn handle_get_upload_url(
        &self,
        input: GetUploadUrlInput,
    ) -> Result<GetUploadUrlOutput, B2Error> {
        Ok(GetUploadUrlOutput {
            authorization_token: self.config.auth_token.clone(),
            upload_url: format!("{}/b2api/v1/b2_upload_file/{UPLOAD_TARGET}", self.root()),
            bucket_id: input.bucket_id,
        })
    }

    /// Handle `b2_upload_file`. The upload always succeeds and nothing is kept.
    #[allow(clippy::needless_pass_by_value, clippy::unnecessary_wraps)]
    pub fn handle_upload_file(&self, input: UploadFileInput) -> Result<UploadFileOutput, B2Error> {
        tracing::debug!(
            file_name = %input.file_name,
            content_length = input.content_length,
            "acknowledged upload"
        );
        Ok(UploadFileOutput::default())
    }
}
