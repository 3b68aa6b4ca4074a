//! B2-specific configuration.
//!
//! Provides [`B2Config`] for configuring the RustStack B2 service. Values are
//! loaded from environment variables, in the same style as the other
//! RustStack services.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::codec::RecordEncoding;

/// B2 service configuration.
///
/// # Examples
///
/// ```
/// use ruststack_b2_core::config::B2Config;
///
/// let config = B2Config::default();
/// assert_eq!(config.gateway_listen, "0.0.0.0:4566");
/// assert_eq!(config.root_url, "http://localhost:4566");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct B2Config {
    /// Bind address for the server (e.g. `"0.0.0.0:4566"`).
    #[builder(default = String::from("0.0.0.0:4566"))]
    pub gateway_listen: String,

    /// Root URL handed to clients as `apiUrl`, and the base of upload URLs.
    #[builder(default = String::from("http://localhost:4566"))]
    pub root_url: String,

    /// Account id reported by `b2_authorize_account`.
    #[builder(default = String::from("000000000000"))]
    pub account_id: String,

    /// Fixed token returned by `b2_authorize_account` and `b2_get_upload_url`.
    #[builder(default = String::from("ruststack-b2-token"))]
    pub auth_token: String,

    /// Byte encoding of records inside the bucket registry.
    #[builder(default)]
    pub record_encoding: RecordEncoding,

    /// Maximum size of a JSON request body.
    #[builder(default = 1_048_576)]
    pub max_request_size: usize,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for B2Config {
    fn default() -> Self {
        Self {
            gateway_listen: String::from("0.0.0.0:4566"),
            root_url: String::from("http://localhost:4566"),
            account_id: String::from("000000000000"),
            auth_token: String::from("ruststack-b2-token"),
            record_encoding: RecordEncoding::Json,
            max_request_size: 1_048_576,
            log_level: String::from("info"),
        }
    }
}

impl B2Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `GATEWAY_LISTEN` | `0.0.0.0:4566` |
    /// | `B2_ROOT_URL` | `http://localhost:4566` |
    /// | `B2_ACCOUNT_ID` | `000000000000` |
    /// | `B2_AUTH_TOKEN` | `ruststack-b2-token` |
    /// | `B2_RECORD_ENCODING` | `json` |
    /// | `B2_MAX_REQUEST_SIZE` | `1048576` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// Unparseable values are ignored and the default is kept.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("GATEWAY_LISTEN") {
            config.gateway_listen = v;
        }
        if let Ok(v) = std::env::var("B2_ROOT_URL") {
            config.root_url = v;
        }
        if let Ok(v) = std::env::var("B2_ACCOUNT_ID") {
            config.account_id = v;
        }
        if let Ok(v) = std::env::var("B2_AUTH_TOKEN") {
            config.auth_token = v;
        }
        if let Ok(v) = std::env::var("B2_RECORD_ENCODING") {
            match v.parse() {
                Ok(encoding) => config.record_encoding = encoding,
                Err(e) => tracing::warn!(error = %e, "ignoring B2_RECORD_ENCODING"),
            }
        }
        if let Ok(v) = std::env::var("B2_MAX_REQUEST_SIZE") {
            if let Ok(n) = v.parse::<usize>() {
                config.max_request_size = n;
            }
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}
