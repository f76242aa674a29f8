//! First phase of `set` handling: fold name/value pairs into named fields

use crate::GatekeeperError;
use provchain_domain::{AgentField, Field};
use std::collections::BTreeMap;

/// Decode host byte-string arguments as UTF-8
///
/// # Errors
/// `MalformedInvocation` naming the first argument that is not valid UTF-8.
pub fn decode_args(args: &[Vec<u8>]) -> Result<Vec<String>, GatekeeperError> {
    args.iter()
        .enumerate()
        .map(|(idx, arg)| {
            String::from_utf8(arg.clone()).map_err(|_| {
                GatekeeperError::MalformedInvocation(format!("argument {} is not valid UTF-8", idx))
            })
        })
        .collect()
}

/// Name/value pairs of a `set` invocation, keyed by recognized field
///
/// Scalar fields keep the last value supplied for them. Digests keep every
/// value in encounter order. Unrecognized names are recorded so they can be
/// reported, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    agent: BTreeMap<AgentField, String>,
    action: Option<String>,
    date: Option<String>,
    digests: Vec<String>,
    unrecognized: Vec<String>,
}

impl ParsedFields {
    /// Fold a flat `name, value, name, value, ...` list
    ///
    /// A trailing name without a value is ignored; callers reject odd-length
    /// lists before parsing.
    pub fn parse<S: AsRef<str>>(pairs: &[S]) -> Self {
        let mut fields = Self::default();

        for pair in pairs.chunks_exact(2) {
            let name = pair[0].as_ref();
            let value = pair[1].as_ref().to_string();

            match Field::parse(name) {
                Field::Agent(agent) => {
                    fields.agent.insert(agent, value);
                }
                Field::Action => fields.action = Some(value),
                Field::Date => fields.date = Some(value),
                Field::Digest => fields.digests.push(value),
                Field::Unrecognized => fields.unrecognized.push(name.to_string()),
            }
        }

        fields
    }

    /// Value of an agent sub-field
    pub fn agent(&self, field: AgentField) -> Option<&str> {
        self.agent.get(&field).map(String::as_str)
    }

    /// Whether any agent sub-field name was supplied
    pub fn has_agent_fields(&self) -> bool {
        !self.agent.is_empty()
    }

    /// Agent sub-fields that are absent or empty
    pub fn missing_agent_fields(&self) -> Vec<AgentField> {
        AgentField::ALL
            .into_iter()
            .filter(|field| self.agent(*field).map_or(true, str::is_empty))
            .collect()
    }

    /// Value of `action`
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Value of `date`
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Digest values in encounter order
    pub fn digests(&self) -> &[String] {
        &self.digests
    }

    /// Names that matched no known field
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}
