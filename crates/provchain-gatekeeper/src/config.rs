//! Gatekeeper configuration

/// Digest cap applied by the default and strict presets
pub const DEFAULT_MAX_DIGESTS: usize = 1024;

/// Configuration for validation rules
///
/// The structural rules (argument count, pair parity, `action`/`date`
/// presence, agent info completeness) always apply. The flags below add
/// optional checks on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Require the agent info block on every `set`
    pub require_agent_info: bool,

    /// Require `date` to parse as `YYYY-MM-DDTHH:MM:SS`
    pub validate_date_format: bool,

    /// Upper bound on digests per record
    pub max_digests: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_agent_info: false,
            validate_date_format: false,
            max_digests: Some(DEFAULT_MAX_DIGESTS),
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural rules only, no digest cap)
    pub fn permissive() -> Self {
        Self {
            require_agent_info: false,
            validate_date_format: false,
            max_digests: None,
        }
    }

    /// Create a strict configuration (all validations enabled)
    ///
    /// Agent info becomes mandatory, matching deployments where every
    /// assertion must name its actor.
    pub fn strict() -> Self {
        Self {
            require_agent_info: true,
            validate_date_format: true,
            max_digests: Some(DEFAULT_MAX_DIGESTS),
        }
    }

    /// Resolve a preset by name ("default", "permissive", "strict")
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "permissive" => Some(Self::permissive()),
            "strict" => Some(Self::strict()),
            _ => None,
        }
    }
}
