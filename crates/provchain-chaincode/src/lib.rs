//! Provchain Chaincode
//!
//! Ledger logic for storing and retrieving provenance assertions, keyed by
//! content fingerprint.
//!
//! Provides 3 functions:
//! - `init` - No-op bootstrap, always succeeds
//! - `set <key> [<name> <value>]...` - Validate, build and store a record
//! - `get <key>` - Return the stored encoded record
//!
//! # Example
//!
//! ```
//! use provchain_chaincode::ProvenanceChaincode;
//! use provchain_store::MemoryState;
//!
//! let chaincode = ProvenanceChaincode::default();
//! let mut state = MemoryState::new();
//!
//! let args: Vec<Vec<u8>> = ["K", "action", "ex:CREATE", "date", "2006-01-02T15:04:05"]
//!     .iter()
//!     .map(|a| a.as_bytes().to_vec())
//!     .collect();
//! assert!(chaincode.invoke(&mut state, "set", &args).is_ok());
//! assert!(chaincode.invoke(&mut state, "get", &args[..1]).is_ok());
//! ```

#![warn(missing_docs)]

mod chaincode;
pub mod config;
mod error;
mod operation;
mod response;
pub mod telemetry;

pub use chaincode::ProvenanceChaincode;
pub use config::{ChaincodeConfig, ConfigError};
pub use error::ChaincodeError;
pub use operation::{Invocation, Operation};
pub use response::{Response, ERROR, OK};

/// Validate `config`, install logging and build the chaincode
///
/// Logging is installed at most once per process; later calls keep the
/// existing subscriber.
pub fn bootstrap(config: &ChaincodeConfig) -> Result<ProvenanceChaincode, ConfigError> {
    let chaincode = ProvenanceChaincode::from_config(config)?;

    if telemetry::init(&config.log_level) {
        tracing::info!("Logging initialized at level {}", config.log_level);
    }
    tracing::info!("Provenance chaincode ready (validation: {})", config.validation);

    Ok(chaincode)
}
