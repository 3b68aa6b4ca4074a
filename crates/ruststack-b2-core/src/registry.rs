//! The bucket registry: a guarded map from bucket identifier to encoded record.
//!
//! One [`parking_lot::Mutex`] protects both the map and the identifier
//! allocator. Every operation holds the guard for its whole critical section,
//! so concurrent `create` calls never observe the same identifier and `list`
//! always sees a consistent snapshot. Nothing awaits while the guard is held.
//!
//! Records are stored in their encoded form and decoded only when listed, so
//! the registry knows nothing about the record schema beyond [`Record`].

use std::collections::HashMap;
use std::marker::PhantomData;

use bytes::Bytes;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::RecordEncoding;
use crate::error::RegistryError;

/// A record the registry can store.
pub trait Record: Serialize + DeserializeOwned {
    /// Overwrite the record's identifier with the server-assigned one.
    fn assign_id(&mut self, id: String);
}

impl Record for ruststack_b2_model::types::Bucket {
    fn assign_id(&mut self, id: String) {
        self.bucket_id = id;
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    /// Encoded records keyed by identifier. Keys are never reused.
    buckets: HashMap<u64, Bytes>,
    /// Next identifier to hand out.
    next_bucket_id: u64,
}

/// Thread-safe in-memory bucket store.
///
/// Share it with `Arc`; each server instance (or test) owns its own.
#[derive(Debug)]
pub struct BucketRegistry<R> {
    encoding: RecordEncoding,
    state: Mutex<RegistryState>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> BucketRegistry<R> {
    /// Create an empty registry storing records with the given encoding.
    #[must_use]
    pub fn new(encoding: RecordEncoding) -> Self {
        Self {
            encoding,
            state: Mutex::new(RegistryState::default()),
            _record: PhantomData,
        }
    }

    /// Decode and return every stored record, in unspecified order.
    pub fn list(&self) -> Result<Vec<R>, RegistryError> {
        let state = self.state.lock();
        let records = state
            .buckets
            .iter()
            .map(|(&bucket_id, bytes)| {
                self.encoding
                    .decode(bytes)
                    .map_err(|source| RegistryError::Decode { bucket_id, source })
            })
            .collect::<Result<Vec<R>, _>>()?;
        tracing::debug!(count = records.len(), "listed buckets");
        Ok(records)
    }

    /// Stamp the next identifier onto `record`, store it, and return it.
    ///
    /// Any identifier already present on `record` is overwritten. The
    /// allocator only advances once the record has been encoded, so a failed
    /// call leaves no gap in the identifier sequence.
    pub fn create(&self, mut record: R) -> Result<R, RegistryError> {
        let mut state = self.state.lock();
        let bucket_id = state.next_bucket_id;

        record.assign_id(bucket_id.to_string());
        let encoded = self
            .encoding
            .encode(&record)
            .map_err(RegistryError::Encode)?;

        state.next_bucket_id += 1;
        state.buckets.insert(bucket_id, encoded);
        tracing::debug!(bucket_id, encoding = %self.encoding, "stored bucket record");

        Ok(record)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().buckets.len()
    }

    /// Whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().buckets.is_empty()
    }

    /// The identifier the next successful `create` will assign.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.state.lock().next_bucket_id
    }

    /// Drop every stored record. The allocator is not rewound, so
    /// identifiers stay unique across resets.
    pub fn reset(&self) {
        self.state.lock().buckets.clear();
    }

    #[cfg(test)]
    pub(crate) fn insert_raw(&self, bucket_id: u64, bytes: Bytes) {
        let mut state = self.state.lock();
        state.buckets.insert(bucket_id, bytes);
        state.next_bucket_id = state.next_bucket_id.max(bucket_id + 1);
    }
}

impl<R: Record> Default for BucketRegistry<R> {
    fn default() -> Self {
        Self::new(RecordEncoding::default())
    }
}
