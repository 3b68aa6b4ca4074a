//! Backblaze B2 HTTP service layer for RustStack.
//!
//! This crate implements the B2 v1 JSON transport, providing:
//!
//! - **Router**: Maps `/b2api/v1/<call>` paths to an operation
//! - **Request helpers**: Auth-token and upload-metadata extraction from headers
//! - **Handler trait**: Defines the boundary between HTTP and business logic
//! - **Service**: Hyper `Service` implementation for the B2 protocol
//! - **Response helpers**: JSON success/error response formatting
#![allow(missing_docs)]

pub mod body;
pub mod dispatch;
pub mod request;
pub mod response;
pub mod router;
pub mod service;

pub use body::B2ResponseBody;
pub use dispatch::{B2Handler, NotImplementedHandler};
pub use service::{B2HttpConfig, B2HttpService};
