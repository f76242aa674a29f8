//! Second phase of `set` handling: construct the record

use crate::ParsedFields;
use provchain_domain::{AgentField, AgentInfo, ProvenanceRecord};
use tracing::debug;

/// Build a record from a key and validated fields
///
/// Unrecognized names are dropped. Agent info is attached only when all four
/// sub-fields carry a value; validation guarantees that is the only case in
/// which any of them is present.
pub fn build_record(key: &str, fields: &ParsedFields) -> ProvenanceRecord {
    for name in fields.unrecognized() {
        debug!("Ignoring unrecognized field '{}' for key {}", name, key);
    }

    let agent_info = if fields.missing_agent_fields().is_empty() {
        Some(AgentInfo::new(
            fields.agent(AgentField::Atype).unwrap_or_default(),
            fields.agent(AgentField::Id).unwrap_or_default(),
            fields.agent(AgentField::Name).unwrap_or_default(),
            fields.agent(AgentField::Idp).unwrap_or_default(),
        ))
    } else {
        None
    };

    ProvenanceRecord {
        key: key.to_string(),
        agent_info,
        action: fields.action().unwrap_or_default().to_string(),
        date: fields.date().unwrap_or_default().to_string(),
        digests: fields.digests().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_agent() {
        let fields = ParsedFields::parse(&["action", "ex:CREATE", "date", "2006-01-02T15:04:05"]);
        let record = build_record("K", &fields);

        assert_eq!(record, ProvenanceRecord::new("K", "ex:CREATE", "2006-01-02T15:04:05"));
    }

    #[test]
    fn test_build_with_agent_and_digests() {
        let fields = ParsedFields::parse(&[
            "agentInfo.atype",
            "1.2.3.4",
            "agentInfo.id",
            "X",
            "agentinfo.name",
            "Y",
            "agentinfo.idp",
            "Z",
            "action",
            "ex:CREATE",
            "date",
            "2006-01-02T15:04:05",
            "digest1",
            "D1",
            "digest3",
            "D2",
        ]);
        let record = build_record("K", &fields);

        assert_eq!(record.agent_info, Some(AgentInfo::new("1.2.3.4", "X", "Y", "Z")));
        assert_eq!(record.digests, vec!["D1", "D2"]);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_unrecognized_fields_dropped() {
        let fields = ParsedFields::parse(&[
            "action",
            "ex:CREATE",
            "date",
            "2006-01-02T15:04:05",
            "agentInfo.version",
            "1",
            "comment",
            "ignored",
        ]);
        let record = build_record("K", &fields);

        assert!(record.agent_info.is_none());
        assert!(record.digests.is_empty());
    }
}
