//! Extraction of side-channel data from B2 request headers.
//!
//! - `Authorization` - the caller's auth token (opaque, never verified)
//! - `X-Bz-File-Name` - percent-encoded upload file name
//! - `X-Bz-Content-Sha1` - caller-computed SHA-1 of the upload
//! - `X-Bz-Info-*` - custom file info, keyed by the suffix

use percent_encoding::percent_decode_str;

use ruststack_b2_model::input::UploadFileInput;

/// Prefix of the custom file-info headers on upload requests.
const FILE_INFO_PREFIX: &str = "x-bz-info-";

/// Extract a header value as a string.
#[must_use]
pub fn header_str(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Extract the auth token from the `Authorization` header.
///
/// A missing, empty, or non-ASCII header means "no token"; it is never an
/// error.
#[must_use]
pub fn extract_auth_token(headers: &http::HeaderMap) -> Option<String> {
    header_str(headers, "authorization").filter(|v| !v.is_empty())
}

/// Build upload metadata from the request headers and the drained body length.
///
/// Every field is optional; malformed values are dropped rather than rejected.
#[must_use]
pub fn upload_input_from_headers(headers: &http::HeaderMap, content_length: u64) -> UploadFileInput {
    UploadFileInput {
        file_name: header_str(headers, "x-bz-file-name")
            .map(|v| decode_file_name(&v))
            .unwrap_or_default(),
        content_type: header_str(headers, "content-type"),
        content_length,
        content_sha1: header_str(headers, "x-bz-content-sha1"),
        file_info: headers
            .iter()
            .filter_map(|(name, value)| {
                let key = name.as_str().strip_prefix(FILE_INFO_PREFIX)?;
                let value = value.to_str().ok()?;
                Some((key.to_owned(), decode_file_name(value)))
            })
            .collect(),
    }
}

/// Decode a percent-encoded header value. B2 clients encode spaces as `+`.
fn decode_file_name(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> http::HeaderMap {
        let mut map = http::HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, http::HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_should_extract_auth_token() {
        let h = headers(&[("authorization", "4_abc123")]);
        assert_eq!(extract_auth_token(&h).as_deref(), Some("4_abc123"));
    }

    #[test]
    fn test_should_treat_missing_or_empty_token_as_none() {
        assert_eq!(extract_auth_token(&http::HeaderMap::new()), None);
        assert_eq!(extract_auth_token(&headers(&[("authorization", "")])), None);
    }

    #[test]
    fn test_should_treat_unreadable_token_as_none() {
        let mut h = http::HeaderMap::new();
        h.insert(
            "authorization",
            http::HeaderValue::from_bytes(b"\xfftoken").unwrap(),
        );
        assert_eq!(extract_auth_token(&h), None);
    }

    #[test]
    fn test_should_build_upload_input_from_headers() {
        let h = headers(&[
            ("x-bz-file-name", "photos/my%20cat+picture.jpg"),
            ("content-type", "image/jpeg"),
            ("x-bz-content-sha1", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            ("x-bz-info-author", "alice"),
            ("x-bz-info-src_last_modified_millis", "1700000000000"),
        ]);
        let input = upload_input_from_headers(&h, 1234);
        assert_eq!(input.file_name, "photos/my cat picture.jpg");
        assert_eq!(input.content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(input.content_length, 1234);
        assert_eq!(
            input.content_sha1.as_deref(),
            Some("da39a3ee5e6b4b0d3255bfef95601890afd80709")
        );
        assert_eq!(input.file_info.len(), 2);
        assert_eq!(input.file_info.get("author").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_should_build_default_upload_input_without_headers() {
        let input = upload_input_from_headers(&http::HeaderMap::new(), 0);
        assert_eq!(input, UploadFileInput::default());
    }
}
