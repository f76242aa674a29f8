//! Trait definitions for external interactions
//!
//! These traits define the boundary between the chaincode logic and the host
//! that runs it. Implementations live in other crates.

/// Key/bytes world state supplied by the host
///
/// Implemented by the infrastructure layer (provchain-store). The host owns
/// atomicity: everything written during one invocation commits together or
/// not at all.
pub trait StateStore {
    /// Error type for host-side read/write failures
    type Error;

    /// Read the value stored under `key`, `None` if absent
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Write `value` under `key`, replacing any previous value
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), Self::Error>;
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
    type Error = S::Error;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        (**self).get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), Self::Error> {
        (**self).put_state(key, value)
    }
}
