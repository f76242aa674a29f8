//! Provenance record - the unit of persisted ledger state

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Violations of the record invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is empty
    #[error("Required field '{0}' is empty")]
    EmptyField(&'static str),

    /// Agent info is present but one of its fields is empty
    #[error("Agent info field '{0}' is empty")]
    EmptyAgentField(&'static str),
}

/// The actor that performed an asserted action
///
/// All four fields travel together: a record either carries a complete
/// `AgentInfo` or none at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    /// Agent type (free-form, typically an OID such as "1.2.3.4")
    pub atype: String,

    /// Agent identifier
    pub id: String,

    /// Agent name or version
    pub name: String,

    /// Identity provider that issued the agent identity
    pub idp: String,
}

impl AgentInfo {
    /// Create a new agent info block
    pub fn new(
        atype: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        idp: impl Into<String>,
    ) -> Self {
        Self {
            atype: atype.into(),
            id: id.into(),
            name: name.into(),
            idp: idp.into(),
        }
    }

    fn validate(&self) -> Result<(), RecordError> {
        let fields = [
            ("atype", &self.atype),
            ("id", &self.id),
            ("name", &self.name),
            ("idp", &self.idp),
        ];

        for (name, value) in fields {
            if value.is_empty() {
                return Err(RecordError::EmptyAgentField(name));
            }
        }

        Ok(())
    }
}

/// A provenance assertion about a piece of content
///
/// Records are replaced wholesale: a second `set` on the same key overwrites
/// the previous record, it never merges into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// Base64-encoded content fingerprint, also the ledger key
    pub key: String,

    /// Actor that performed the action
    #[serde(
        rename = "agentInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_info: Option<AgentInfo>,

    /// Action code (e.g. "ex:CREATE")
    pub action: String,

    /// Timestamp as received, `YYYY-MM-DDTHH:MM:SS`
    pub date: String,

    /// Fingerprints of the constituent segments, in assertion order
    #[serde(default)]
    pub digests: Vec<String>,
}

impl ProvenanceRecord {
    /// Create a new record without agent info or digests
    pub fn new(key: impl Into<String>, action: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            agent_info: None,
            action: action.into(),
            date: date.into(),
            digests: Vec::new(),
        }
    }

    /// Attach agent info
    pub fn with_agent(mut self, agent: AgentInfo) -> Self {
        self.agent_info = Some(agent);
        self
    }

    /// Append a segment digest
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digests.push(digest.into());
        self
    }

    /// Check the record invariants
    ///
    /// # Errors
    /// Returns the first violated invariant: empty key, action or date, or an
    /// agent info block with an empty field.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.key.is_empty() {
            return Err(RecordError::EmptyField("key"));
        }
        if self.action.is_empty() {
            return Err(RecordError::EmptyField("action"));
        }
        if self.date.is_empty() {
            return Err(RecordError::EmptyField("date"));
        }
        if let Some(agent) = &self.agent_info {
            agent.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ProvenanceRecord {
        let key = "S52fkpF2rCEArSuwqyDA9tVjawUdrkGzbNQLaa7xJfA=";
        ProvenanceRecord::new(key, "ex:CREATE", "2006-01-02T15:04:05")
    }

    #[test]
    fn test_new_record_is_valid() {
        let record = sample_record();
        assert!(record.validate().is_ok());
        assert!(record.agent_info.is_none());
        assert!(record.digests.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let record = sample_record()
            .with_agent(AgentInfo::new(
                "1.2.3.4",
                "agentidentifier",
                "7.8.9",
                "urn:tiani-spirit:sts",
            ))
            .with_digest("D1")
            .with_digest("D2");

        assert!(record.validate().is_ok());
        assert_eq!(record.digests, vec!["D1", "D2"]);
        assert_eq!(record.agent_info.as_ref().unwrap().idp, "urn:tiani-spirit:sts");
    }

    #[test]
    fn test_empty_required_fields() {
        let mut record = sample_record();
        record.key.clear();
        assert_eq!(record.validate(), Err(RecordError::EmptyField("key")));

        let mut record = sample_record();
        record.action.clear();
        assert_eq!(record.validate(), Err(RecordError::EmptyField("action")));

        let mut record = sample_record();
        record.date.clear();
        assert_eq!(record.validate(), Err(RecordError::EmptyField("date")));
    }

    #[test]
    fn test_partial_agent_info_rejected() {
        let record = sample_record().with_agent(AgentInfo::new("1.2.3.4", "", "7.8.9", "idp"));
        assert_eq!(record.validate(), Err(RecordError::EmptyAgentField("id")));
    }

    #[test]
    fn test_duplicate_digests_are_kept() {
        let record = sample_record().with_digest("D1").with_digest("D1");
        assert_eq!(record.digests.len(), 2);
    }
}
