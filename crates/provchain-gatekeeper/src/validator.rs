//! Argument validation for `set` invocations

use crate::{build_record, GatekeeperError, ParsedFields, ValidationConfig};
use chrono::NaiveDateTime;
use provchain_domain::ProvenanceRecord;
use std::fmt;
use tracing::debug;

/// Minimum `set` argument count: key plus one name/value pair
pub const MIN_SET_ARGS: usize = 3;

/// Accepted `date` layout when date checking is enabled
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Result of argument validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the arguments passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the arguments were accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Arguments accepted
    Accepted,

    /// Arguments rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Fewer arguments than a key plus one pair
    TooFewArguments {
        /// Minimum argument count
        expected: usize,
        /// Supplied argument count
        actual: usize,
    },

    /// The pairs after the key do not come in twos
    OddFieldList(usize),

    /// Empty ledger key
    EmptyKey,

    /// Required field absent or empty
    MissingField(&'static str),

    /// Some but not all agent info fields supplied
    PartialAgentInfo {
        /// Canonical names of the absent sub-fields
        missing: Vec<&'static str>,
    },

    /// Agent info required by configuration but absent
    MissingAgentInfo,

    /// `date` does not match the expected layout
    InvalidDate(String),

    /// More digests than configured
    TooManyDigests {
        /// Configured maximum
        max: usize,
        /// Supplied digest count
        actual: usize,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::TooFewArguments { expected, actual } => write!(
                f,
                "expected at least {} arguments (key and one name/value pair), got {}",
                expected, actual
            ),
            RejectionReason::OddFieldList(len) => {
                write!(f, "field list after the key has odd length {}", len)
            }
            RejectionReason::EmptyKey => write!(f, "key is empty"),
            RejectionReason::MissingField(name) => {
                write!(f, "required field '{}' is missing", name)
            }
            RejectionReason::PartialAgentInfo { missing } => {
                write!(f, "incomplete agent info, missing {}", missing.join(", "))
            }
            RejectionReason::MissingAgentInfo => write!(f, "agent info is required"),
            RejectionReason::InvalidDate(date) => {
                write!(f, "date '{}' does not match YYYY-MM-DDTHH:MM:SS", date)
            }
            RejectionReason::TooManyDigests { max, actual } => {
                write!(f, "{} digests supplied, at most {} allowed", actual, max)
            }
        }
    }
}

/// The Gatekeeper validates `set` arguments before a record is built
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a `set` argument list (key first, then name/value pairs)
    ///
    /// Every violated rule is reported, except that count and parity
    /// failures stop validation before the pairs are inspected.
    pub fn validate<S: AsRef<str>>(&self, args: &[S]) -> ValidationResult {
        let (reasons, _) = self.evaluate(args);
        Self::result(reasons)
    }

    /// Validate and, if accepted, build the record
    ///
    /// # Errors
    /// `MalformedInvocation` carrying every rejection reason.
    pub fn admit<S: AsRef<str>>(&self, args: &[S]) -> Result<ProvenanceRecord, GatekeeperError> {
        match self.evaluate(args) {
            (reasons, Some(fields)) if reasons.is_empty() => {
                let key = args[0].as_ref();
                Ok(build_record(key, &fields))
            }
            (reasons, _) => Err(GatekeeperError::MalformedInvocation(
                reasons
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )),
        }
    }

    fn result(reasons: Vec<RejectionReason>) -> ValidationResult {
        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    fn evaluate<S: AsRef<str>>(&self, args: &[S]) -> (Vec<RejectionReason>, Option<ParsedFields>) {
        let mut reasons = Vec::new();

        // 1. Argument count
        if args.len() < MIN_SET_ARGS {
            reasons.push(RejectionReason::TooFewArguments {
                expected: MIN_SET_ARGS,
                actual: args.len(),
            });
            return (reasons, None);
        }

        // 2. Pair parity
        let (key, pairs) = (args[0].as_ref(), &args[1..]);
        if pairs.len() % 2 != 0 {
            reasons.push(RejectionReason::OddFieldList(pairs.len()));
            return (reasons, None);
        }

        if key.is_empty() {
            reasons.push(RejectionReason::EmptyKey);
        }

        let fields = ParsedFields::parse(pairs);
        debug!(
            "Parsed {} pairs for key {} ({} digests, {} unrecognized)",
            pairs.len() / 2,
            key,
            fields.digests().len(),
            fields.unrecognized().len()
        );

        // 3. Required fields
        if fields.action().map_or(true, str::is_empty) {
            reasons.push(RejectionReason::MissingField("action"));
        }
        if fields.date().map_or(true, str::is_empty) {
            reasons.push(RejectionReason::MissingField("date"));
        }

        // 4. Agent info completeness
        if let Some(reason) = self.validate_agent_info(&fields) {
            reasons.push(reason);
        }

        // 5. Optional checks
        if self.config.validate_date_format {
            if let Some(reason) = Self::validate_date(&fields) {
                reasons.push(reason);
            }
        }

        if let Some(max) = self.config.max_digests {
            if fields.digests().len() > max {
                reasons.push(RejectionReason::TooManyDigests {
                    max,
                    actual: fields.digests().len(),
                });
            }
        }

        (reasons, Some(fields))
    }

    /// Agent info is all-or-nothing, and mandatory under `require_agent_info`
    fn validate_agent_info(&self, fields: &ParsedFields) -> Option<RejectionReason> {
        if !fields.has_agent_fields() {
            return self
                .config
                .require_agent_info
                .then_some(RejectionReason::MissingAgentInfo);
        }

        let missing = fields.missing_agent_fields();
        if missing.is_empty() {
            return None;
        }

        Some(RejectionReason::PartialAgentInfo {
            missing: missing.iter().map(|field| field.as_str()).collect(),
        })
    }

    fn validate_date(fields: &ParsedFields) -> Option<RejectionReason> {
        // An absent date is already reported as a missing field
        let date = fields.date().filter(|d| !d.is_empty())?;

        match NaiveDateTime::parse_from_str(date, DATE_FORMAT) {
            Ok(_) => None,
            Err(_) => Some(RejectionReason::InvalidDate(date.to_string())),
        }
    }
}
