//! Provchain Gatekeeper
//!
//! Validates `set` argument lists and folds them into provenance records.
//!
//! Handling is two-phase:
//! - [`ParsedFields::parse`] folds the flat name/value list into named fields
//!   (case-insensitive names, digests in encounter order)
//! - [`Gatekeeper`] checks the structural rules and builds the record
//!
//! # Examples
//!
//! ```
//! use provchain_gatekeeper::{Gatekeeper, ValidationConfig};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! let record = gatekeeper
//!     .admit(&["K", "action", "ex:CREATE", "date", "2006-01-02T15:04:05"])
//!     .unwrap();
//! assert!(record.digests.is_empty());
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod fields;
mod validator;

pub use builder::build_record;
pub use config::{ValidationConfig, DEFAULT_MAX_DIGESTS};
pub use error::GatekeeperError;
pub use fields::{decode_args, ParsedFields};
pub use validator::{
    Gatekeeper, RejectionReason, ValidationResult, ValidationStatus, DATE_FORMAT, MIN_SET_ARGS,
};
