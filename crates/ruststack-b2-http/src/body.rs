//! B2 HTTP response body type.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::Full;

/// Response body for B2 HTTP responses.
///
/// Every B2 response is a small JSON document, so bodies are fully buffered.
#[derive(Debug)]
pub struct B2ResponseBody(Full<Bytes>);

impl B2ResponseBody {
    /// Create a response body from raw bytes.
    #[must_use]
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self(Full::new(data.into()))
    }

    /// Create a response body from a static string.
    #[must_use]
    pub fn from_static(s: &'static str) -> Self {
        Self(Full::new(Bytes::from_static(s.as_bytes())))
    }
}

impl http_body::Body for B2ResponseBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        Pin::new(&mut self.get_mut().0)
            .poll_frame(cx)
            .map_err(|never| match never {})
    }

    fn is_end_stream(&self) -> bool {
        self.0.is_end_stream()
    }

    fn size_hint(&self) -> http_body::SizeHint {
        self.0.size_hint()
    }
}
