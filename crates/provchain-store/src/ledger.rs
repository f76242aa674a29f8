//! Ledger accessor over host world state

use crate::{codec, StoreError};
use provchain_domain::{ProvenanceRecord, StateStore};
use std::fmt::Display;
use tracing::debug;

/// Pass-through accessor over a host-supplied [`StateStore`]
///
/// Holds no cache: every read goes to world state. Atomicity and conflict
/// handling belong to the host.
pub struct Ledger<S> {
    state: S,
}

impl<S> Ledger<S>
where
    S: StateStore,
    S::Error: Display,
{
    /// Wrap a world-state handle
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Read the raw bytes stored under `key`
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.state
            .get_state(key)
            .map_err(|e| StoreError::Storage(format!("Failed to read '{}': {}", key, e)))
    }

    /// Write raw bytes under `key`
    pub fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.state
            .put_state(key, value)
            .map_err(|e| StoreError::Storage(format!("Failed to write '{}': {}", key, e)))
    }

    /// Encode and store a record under its own key, replacing any previous one
    ///
    /// # Errors
    /// `InvalidRecord` if the record breaks a record invariant, in which case
    /// world state is left untouched.
    pub fn put_record(&mut self, record: &ProvenanceRecord) -> Result<(), StoreError> {
        let bytes = codec::encode_record(record)?;
        debug!("Writing {} bytes for key {}", bytes.len(), record.key);
        self.put(&record.key, &bytes)
    }

    /// Read and decode the record stored under `key`
    ///
    /// # Errors
    /// `NotFound` if nothing is stored, `CorruptRecord` if the stored bytes
    /// do not decode or hold a record for a different key.
    pub fn get_record(&self, key: &str) -> Result<ProvenanceRecord, StoreError> {
        let bytes = self
            .get(key)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        codec::decode_record_for(key, &bytes)
    }

    /// Borrow the underlying world state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Release the underlying world state
    pub fn into_inner(self) -> S {
        self.state
    }
}
