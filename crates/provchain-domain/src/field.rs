//! Field names of a flattened `set` argument list
//!
//! Names are matched case-insensitively (ASCII lowercasing), so
//! `agentInfo.name` and `agentinfo.name` name the same field. Any name whose
//! lowercased form starts with `digest` is a segment digest; the suffix is
//! free-form and only the position in the argument list matters.

/// Prefix shared by all segment digest field names
pub const DIGEST_PREFIX: &str = "digest";

/// One of the four agent info sub-fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentField {
    /// `agentInfo.atype`
    Atype,

    /// `agentInfo.id`
    Id,

    /// `agentInfo.name`
    Name,

    /// `agentInfo.idp`
    Idp,
}

impl AgentField {
    /// All agent fields, in canonical order
    pub const ALL: [AgentField; 4] = [
        AgentField::Atype,
        AgentField::Id,
        AgentField::Name,
        AgentField::Idp,
    ];

    /// Canonical argument name
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentField::Atype => "agentInfo.atype",
            AgentField::Id => "agentInfo.id",
            AgentField::Name => "agentInfo.name",
            AgentField::Idp => "agentInfo.idp",
        }
    }
}

/// A recognized (or unrecognized) field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// An agent info sub-field
    Agent(AgentField),

    /// `action`
    Action,

    /// `date`
    Date,

    /// `digest<N>`
    Digest,

    /// Anything else; ignored when building a record
    Unrecognized,
}

impl Field {
    /// Classify an argument name
    pub fn parse(name: &str) -> Self {
        let lowered = name.to_ascii_lowercase();
        match lowered.as_str() {
            "agentinfo.atype" => Field::Agent(AgentField::Atype),
            "agentinfo.id" => Field::Agent(AgentField::Id),
            "agentinfo.name" => Field::Agent(AgentField::Name),
            "agentinfo.idp" => Field::Agent(AgentField::Idp),
            "action" => Field::Action,
            "date" => Field::Date,
            other if other.starts_with(DIGEST_PREFIX) => Field::Digest,
            _ => Field::Unrecognized,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Classification ignores ASCII case
        #[test]
        fn test_parse_ignores_case(name in "[a-zA-Z.]{0,20}") {
            prop_assert_eq!(
                Field::parse(&name),
                Field::parse(&name.to_ascii_uppercase())
            );
        }

        /// Property: Any suffix after the digest prefix is a digest
        #[test]
        fn test_any_digest_suffix(suffix in "[0-9a-zA-Z_]{0,8}") {
            let name = format!("digest{}", suffix);
            prop_assert_eq!(Field::parse(&name), Field::Digest);
        }
    }
}
