//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatekeeperError {
    /// The invocation's argument list is structurally invalid
    #[error("Malformed invocation: {0}")]
    MalformedInvocation(String),
}
