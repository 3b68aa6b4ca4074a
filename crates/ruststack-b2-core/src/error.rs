//! Core error types for the B2 registry.

use ruststack_b2_model::error::B2Error;

/// Failure of a [`RecordEncoding`](crate::codec::RecordEncoding).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CBOR encode error: {0}")]
    CborEncode(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("CBOR decode error: {0}")]
    CborDecode(#[from] ciborium::de::Error<std::io::Error>),

    #[error("unknown record encoding: {0} (expected json or cbor)")]
    UnknownEncoding(String),
}

/// Errors raised inside the registry's critical section.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A caller-supplied record could not be serialized. Nothing was stored.
    #[error("failed to encode bucket record")]
    Encode(#[source] CodecError),

    /// A stored record no longer decodes. This means the registry state is
    /// corrupt.
    #[error("failed to decode stored bucket {bucket_id}")]
    Decode {
        bucket_id: u64,
        #[source]
        source: CodecError,
    },
}

/// Convert a registry error into a B2 internal error.
///
/// Takes `e` by value because this is used as a closure argument to `.map_err()`.
#[must_use]
pub fn registry_error_to_b2(e: RegistryError) -> B2Error {
    B2Error::internal_error(e.to_string()).with_source(e)
}
