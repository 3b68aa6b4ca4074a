//! Backblaze B2 core business logic for RustStack.
//!
//! The heart of this crate is [`BucketRegistry`](registry::BucketRegistry):
//! a single mutex guarding the bucket map and its identifier allocator.
//! [`RustStackB2`](provider::RustStackB2) implements the B2 calls on top of
//! it, and [`RustStackB2Handler`](handler::RustStackB2Handler) plugs the
//! provider into the HTTP layer.
#![allow(missing_docs, clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod codec;
pub mod config;
pub mod error;
pub mod handler;
pub mod provider;
pub mod registry;

pub use config::B2Config;
pub use handler::RustStackB2Handler;
pub use provider::RustStackB2;
pub use registry::{BucketRegistry, Record};
