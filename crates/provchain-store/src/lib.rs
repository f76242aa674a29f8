//! Provchain Storage Layer
//!
//! Ledger access and record encoding for provenance records.
//!
//! # Architecture
//!
//! - [`Ledger`] is a thin pass-through over a host-supplied
//!   [`StateStore`](provchain_domain::StateStore); no caching, no retries
//! - [`codec`] converts records to and from the bytes kept in world state
//! - [`MemoryState`] and [`SqliteState`] are world-state backends for tests
//!   and local hosts
//!
//! # Examples
//!
//! ```
//! use provchain_domain::ProvenanceRecord;
//! use provchain_store::{Ledger, MemoryState};
//!
//! let mut ledger = Ledger::new(MemoryState::new());
//! let record = ProvenanceRecord::new("K", "ex:CREATE", "2006-01-02T15:04:05");
//! ledger.put_record(&record).unwrap();
//! assert_eq!(ledger.get_record("K").unwrap(), record);
//! ```

#![warn(missing_docs)]

pub mod codec;
mod ledger;
mod memory;
mod sqlite;

pub use codec::{decode_record, decode_record_for, encode_record};
pub use ledger::Ledger;
pub use memory::MemoryState;
pub use sqlite::SqliteState;

use thiserror::Error;

/// Errors that can occur during ledger operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record stored under the key
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Stored bytes are not a valid provenance record
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    /// Record refused before writing because it breaks a record invariant
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Host-side read/write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite backend error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
