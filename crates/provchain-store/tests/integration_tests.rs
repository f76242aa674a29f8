//! Integration tests for provchain-store
//!
//! These tests verify the record write/read cycle over both world-state
//! backends.

use provchain_domain::{AgentInfo, ProvenanceRecord, StateStore};
use provchain_store::{Ledger, MemoryState, SqliteState, StoreError};
use tempfile::TempDir;

fn segmented_record() -> ProvenanceRecord {
    ProvenanceRecord::new(
        "S52fkpF2rCEArSuwqyDA9tVjawUdrkGzbNQLaa7xJfA=",
        "ex:CREATE",
        "2006-01-02T15:04:05",
    )
    .with_agent(AgentInfo::new(
        "1.2.3.4",
        "agentidentifier",
        "7.8.9",
        "urn:tiani-spirit:sts",
    ))
    .with_digest("E0nioxbCYD5AlzGWXDDDl0Gt5AAKv3ppKt4XMhE1rfo")
    .with_digest("xLrbWN5QJBJUAsdevfrxGlN3o0p8VZMnFFnV9iMll5o")
}

#[test]
fn test_sqlite_initialization() {
    let state = SqliteState::new(":memory:");
    assert!(state.is_ok(), "State should initialize successfully");
}

#[test]
fn test_sqlite_record_cycle() {
    let mut ledger = Ledger::new(SqliteState::new(":memory:").unwrap());
    let record = segmented_record();

    ledger.put_record(&record).unwrap();

    let retrieved = ledger.get_record(&record.key).unwrap();
    assert_eq!(retrieved, record);
    assert_eq!(retrieved.digests.len(), 2);
}

#[test]
fn test_sqlite_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.db");
    let record = segmented_record();

    {
        let mut ledger = Ledger::new(SqliteState::new(&path).unwrap());
        ledger.put_record(&record).unwrap();
    }

    let ledger = Ledger::new(SqliteState::new(&path).unwrap());
    assert_eq!(ledger.get_record(&record.key).unwrap(), record);
    assert_eq!(ledger.state().len().unwrap(), 1);
}

#[test]
fn test_sqlite_missing_key() {
    let ledger = Ledger::new(SqliteState::new(":memory:").unwrap());
    let result = ledger.get_record("never-written");
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_memory_and_sqlite_store_identical_bytes() {
    let record = segmented_record();

    let mut memory = Ledger::new(MemoryState::new());
    let mut sqlite = Ledger::new(SqliteState::new(":memory:").unwrap());
    memory.put_record(&record).unwrap();
    sqlite.put_record(&record).unwrap();

    let memory_bytes = memory.into_inner().get_state(&record.key).unwrap();
    let sqlite_bytes = sqlite.into_inner().get_state(&record.key).unwrap();
    assert_eq!(memory_bytes, sqlite_bytes);
}

#[test]
fn test_overwrite_replaces_whole_record() {
    let mut ledger = Ledger::new(SqliteState::new(":memory:").unwrap());
    let first = segmented_record();
    let second = ProvenanceRecord::new(first.key.clone(), "ex:UPDATE", "2010-05-06T07:08:09");

    ledger.put_record(&first).unwrap();
    ledger.put_record(&second).unwrap();

    let stored = ledger.get_record(&first.key).unwrap();
    assert_eq!(stored.action, "ex:UPDATE");
    assert!(stored.agent_info.is_none());
    assert!(stored.digests.is_empty());
}
