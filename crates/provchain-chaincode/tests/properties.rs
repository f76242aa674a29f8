//! Property tests for the invocation surface

use proptest::prelude::*;
use provchain_chaincode::ProvenanceChaincode;
use provchain_store::{decode_record, MemoryState};

fn to_bytes(values: &[String]) -> Vec<Vec<u8>> {
    values.iter().map(|v| v.as_bytes().to_vec()).collect()
}

proptest! {
    /// Property: init succeeds for any arguments and never writes state
    #[test]
    fn test_init_always_succeeds(
        raw in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..16), 0..8),
    ) {
        let chaincode = ProvenanceChaincode::default();
        let mut state = MemoryState::new();

        prop_assert!(chaincode.init(&mut state, &raw).is_ok());
        prop_assert!(chaincode.invoke(&mut state, "init", &raw).is_ok());
        prop_assert!(state.is_empty());
    }

    /// Property: get after a successful set returns what was set
    #[test]
    fn test_set_then_get(
        key in "[A-Za-z0-9+/]{1,43}=",
        action in "[a-z]{1,6}:[A-Z]{1,10}",
        date in "[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}",
        digests in proptest::collection::vec("[A-Za-z0-9]{43}", 0..6),
    ) {
        let chaincode = ProvenanceChaincode::default();
        let mut state = MemoryState::new();

        let mut values = vec![
            key.clone(),
            "action".to_string(),
            action.clone(),
            "date".to_string(),
            date.clone(),
        ];
        for (idx, digest) in digests.iter().enumerate() {
            values.push(format!("digest{}", idx + 1));
            values.push(digest.clone());
        }

        let set = chaincode.invoke(&mut state, "set", &to_bytes(&values));
        prop_assert!(set.is_ok(), "set failed: {}", set.message);

        let get = chaincode.invoke(&mut state, "get", &to_bytes(&[key.clone()]));
        prop_assert!(get.is_ok(), "get failed: {}", get.message);

        let record = decode_record(&get.payload).unwrap();
        prop_assert_eq!(record.key, key);
        prop_assert_eq!(record.action, action);
        prop_assert_eq!(record.date, date);
        prop_assert_eq!(record.digests, digests);
    }

    /// Property: get on an empty ledger is always a failure
    #[test]
    fn test_get_unwritten_key_fails(key in "[A-Za-z0-9+/=]{1,44}") {
        let chaincode = ProvenanceChaincode::default();
        let mut state = MemoryState::new();

        let get = chaincode.invoke(&mut state, "get", &to_bytes(&[key]));
        prop_assert!(!get.is_ok());
        prop_assert!(get.message.starts_with("Record not found"));
    }
}
