//! Byte encodings for records stored in the bucket registry.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Format used to store records inside the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordEncoding {
    /// `serde_json`.
    #[default]
    Json,
    /// CBOR via `ciborium`.
    Cbor,
}

impl RecordEncoding {
    /// Encode a record into an opaque byte buffer.
    pub fn encode<T: Serialize>(self, value: &T) -> Result<Bytes, CodecError> {
        match self {
            Self::Json => Ok(Bytes::from(serde_json::to_vec(value)?)),
            Self::Cbor => {
                let mut buf = Vec::new();
                ciborium::ser::into_writer(value, &mut buf)?;
                Ok(Bytes::from(buf))
            }
        }
    }

    /// Decode a record previously produced by [`encode`](Self::encode).
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes)?),
            Self::Cbor => Ok(ciborium::de::from_reader(bytes)?),
        }
    }

    /// Name accepted by `B2_RECORD_ENCODING` for this encoding.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Cbor => "cbor",
        }
    }
}

impl FromStr for RecordEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "cbor" => Ok(Self::Cbor),
            _ => Err(CodecError::UnknownEncoding(s.to_owned())),
        }
    }
}

impl fmt::Display for RecordEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
