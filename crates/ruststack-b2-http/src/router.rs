//! B2 request router.
//!
//! B2 addresses each call by path, one call per path segment under the
//! versioned API prefix:
//!
//! ```text
//! POST /b2api/v1/b2_create_bucket
//! POST /b2api/v1/b2_upload_file/<upload target>
//! ```

use ruststack_b2_model::error::B2Error;
use ruststack_b2_model::operations::B2Operation;

/// Path prefix shared by every B2 v1 call.
pub const API_PREFIX: &str = "/b2api/v1/";

/// Resolve a B2 operation from the request method and path.
///
/// Upload calls carry an opaque upload target after the call name, so only
/// the first segment after the prefix selects the operation.
pub fn resolve_operation(method: &http::Method, path: &str) -> Result<B2Operation, B2Error> {
    let call = path
        .strip_prefix(API_PREFIX)
        .ok_or_else(|| B2Error::unknown_operation(path))?;

    let (name, rest) = call.split_once('/').unwrap_or((call, ""));

    let op = B2Operation::from_name(name).ok_or_else(|| B2Error::unknown_operation(path))?;

    if !rest.is_empty() && op != B2Operation::UploadFile {
        return Err(B2Error::unknown_operation(path));
    }

    let method_ok = *method == http::Method::POST || (op.allows_get() && *method == http::Method::GET);
    if !method_ok {
        return Err(B2Error::method_not_allowed(method, op.as_str()));
    }

    Ok(op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruststack_b2_model::error::B2ErrorCode;

    #[test]
    fn test_should_resolve_all_operations() {
        let ops = [
            ("/b2api/v1/b2_authorize_account", B2Operation::AuthorizeAccount),
            ("/b2api/v1/b2_list_buckets", B2Operation::ListBuckets),
            ("/b2api/v1/b2_create_bucket", B2Operation::CreateBucket),
            ("/b2api/v1/b2_get_upload_url", B2Operation::GetUploadUrl),
            ("/b2api/v1/b2_upload_file", B2Operation::UploadFile),
        ];
        for (path, expected) in ops {
            let op = resolve_operation(&http::Method::POST, path).unwrap();
            assert_eq!(op, expected, "failed for path: {path}");
        }
    }

    #[test]
    fn test_should_resolve_upload_with_target_suffix() {
        let op =
            resolve_operation(&http::Method::POST, "/b2api/v1/b2_upload_file/uploader").unwrap();
        assert_eq!(op, B2Operation::UploadFile);
    }

    #[test]
    fn test_should_allow_get_for_authorize_only() {
        let op = resolve_operation(&http::Method::GET, "/b2api/v1/b2_authorize_account").unwrap();
        assert_eq!(op, B2Operation::AuthorizeAccount);

        let err = resolve_operation(&http::Method::GET, "/b2api/v1/b2_create_bucket").unwrap_err();
        assert_eq!(err.code, B2ErrorCode::MethodNotAllowed);
    }

    #[test]
    fn test_should_error_on_unknown_call() {
        let err = resolve_operation(&http::Method::POST, "/b2api/v1/b2_delete_bucket").unwrap_err();
        assert_eq!(err.code, B2ErrorCode::NotFound);
    }

    #[test]
    fn test_should_error_on_wrong_prefix() {
        let err = resolve_operation(&http::Method::POST, "/b2api/v9/b2_list_buckets").unwrap_err();
        assert_eq!(err.code, B2ErrorCode::NotFound);
    }

    #[test]
    fn test_should_error_on_suffix_for_non_upload_call() {
        let err =
            resolve_operation(&http::Method::POST, "/b2api/v1/b2_list_buckets/extra").unwrap_err();
        assert_eq!(err.code, B2ErrorCode::NotFound);
    }
}
