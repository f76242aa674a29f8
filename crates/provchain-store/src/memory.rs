//! In-process world state

use provchain_domain::StateStore;
use std::collections::BTreeMap;
use std::convert::Infallible;

/// `BTreeMap`-backed world state
///
/// Stands in for the host's mock stub in tests. Writes are visible
/// immediately; there is no transaction buffering.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryState {
    type Error = Infallible;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_put() {
        let mut state = MemoryState::new();
        assert!(state.is_empty());
        assert_eq!(state.get_state("a").unwrap(), None);

        state.put_state("a", b"1").unwrap();
        state.put_state("a", b"2").unwrap();
        state.put_state("b", b"3").unwrap();

        assert_eq!(state.get_state("a").unwrap(), Some(b"2".to_vec()));
        assert_eq!(state.len(), 2);
        assert_eq!(state.get_state("b").unwrap(), Some(b"3".to_vec()));
    }
}
