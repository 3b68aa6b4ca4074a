//! Backblaze B2 model types for RustStack.
//!
//! This crate provides the B2 v1 JSON API types needed by the RustStack B2
//! emulator. The types are hand-written; the B2 API is plain camelCase JSON,
//! so serde derives cover the whole wire format.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod context;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use context::RequestContext;
pub use error::{B2Error, B2ErrorCode};
pub use operations::B2Operation;
pub use types::Bucket;
