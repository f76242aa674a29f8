//! Provchain Domain Layer
//!
//! This crate contains the domain model for provenance assertions stored on a
//! permissioned ledger. It performs no I/O and defines the value objects and
//! trait interfaces that the other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Provenance record**: an assertion that an action was performed on a
//!   piece of content, keyed by the content fingerprint
//! - **Agent info**: who performed the action (all four fields or none)
//! - **Digests**: fingerprints of the segments a document is composed of
//! - **Fields**: the recognized names of a flattened `set` argument list
//! - **State store**: the host-supplied key/bytes ledger
//!
//! ## Architecture
//!
//! - Serde derives only, no runtime dependencies on infrastructure
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use field::{AgentField, Field};
pub use record::{AgentInfo, ProvenanceRecord, RecordError};
pub use traits::StateStore;
