//! Error types for chaincode invocations.

use provchain_gatekeeper::GatekeeperError;
use provchain_store::StoreError;
use thiserror::Error;

/// Invocation failure kinds surfaced to the host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChaincodeError {
    /// Structurally invalid arguments or unknown function
    #[error("Malformed invocation: {0}")]
    MalformedInvocation(String),

    /// No record stored under the requested key
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Stored bytes do not decode to a record
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    /// Host-side state read/write failure
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ChaincodeError {
    /// Short name of the failure kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ChaincodeError::MalformedInvocation(_) => "malformed_invocation",
            ChaincodeError::NotFound(_) => "not_found",
            ChaincodeError::CorruptRecord(_) => "corrupt_record",
            ChaincodeError::StorageError(_) => "storage_error",
        }
    }
}

impl From<GatekeeperError> for ChaincodeError {
    fn from(e: GatekeeperError) -> Self {
        match e {
            GatekeeperError::MalformedInvocation(msg) => ChaincodeError::MalformedInvocation(msg),
        }
    }
}

impl From<StoreError> for ChaincodeError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(key) => ChaincodeError::NotFound(key),
            StoreError::CorruptRecord(msg) => ChaincodeError::CorruptRecord(msg),
            StoreError::InvalidRecord(msg) => ChaincodeError::MalformedInvocation(msg),
            StoreError::Storage(msg) => ChaincodeError::StorageError(msg),
            StoreError::Database(e) => ChaincodeError::StorageError(e.to_string()),
        }
    }
}
