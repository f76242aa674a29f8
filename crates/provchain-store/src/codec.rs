//! Ledger encoding of provenance records
//!
//! Records are stored as JSON objects with the keys `key`, `agentInfo`,
//! `action`, `date` and `digests`. Key order is irrelevant on decode and
//! `agentInfo`/`digests` may be omitted.

use crate::StoreError;
use provchain_domain::ProvenanceRecord;

/// Encode a record into the bytes written to world state
///
/// # Errors
/// Returns `InvalidRecord` if the record breaks a record invariant; nothing
/// that fails here can reach world state.
pub fn encode_record(record: &ProvenanceRecord) -> Result<Vec<u8>, StoreError> {
    record
        .validate()
        .map_err(|e| StoreError::InvalidRecord(e.to_string()))?;

    serde_json::to_vec(record).map_err(|e| {
        StoreError::InvalidRecord(format!("Failed to encode '{}': {}", record.key, e))
    })
}

/// Decode bytes read from world state
///
/// # Errors
/// Returns `CorruptRecord` if the bytes are not JSON of the record shape or
/// if the decoded record breaks a record invariant.
pub fn decode_record(bytes: &[u8]) -> Result<ProvenanceRecord, StoreError> {
    let record: ProvenanceRecord = serde_json::from_slice(bytes)
        .map_err(|e| StoreError::CorruptRecord(e.to_string()))?;

    record
        .validate()
        .map_err(|e| StoreError::CorruptRecord(e.to_string()))?;

    Ok(record)
}

/// Decode bytes read from world state under `key`
///
/// A record always lives under its own key, so a decoded key that differs
/// from `key` is reported as `CorruptRecord`.
pub fn decode_record_for(key: &str, bytes: &[u8]) -> Result<ProvenanceRecord, StoreError> {
    let record = decode_record(bytes)?;

    if record.key != key {
        return Err(StoreError::CorruptRecord(format!(
            "record under '{}' is keyed '{}'",
            key, record.key
        )));
    }

    Ok(record)
}
