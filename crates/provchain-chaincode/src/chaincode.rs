//! Invocation router

use provchain_domain::{ProvenanceRecord, StateStore};
use provchain_gatekeeper::{decode_args, Gatekeeper, ValidationConfig};
use provchain_store::{codec, Ledger};
use std::fmt::Display;
use tracing::{debug, info, warn};

use crate::config::{ChaincodeConfig, ConfigError};
use crate::error::ChaincodeError;
use crate::operation::{Invocation, Operation};
use crate::response::Response;

/// Provenance chaincode
///
/// Holds only validation configuration. World state is handed in on every
/// call, so one instance can serve any number of invocations.
pub struct ProvenanceChaincode {
    gatekeeper: Gatekeeper,
}

impl ProvenanceChaincode {
    /// Create a chaincode with the given validation rules
    pub fn new(validation: ValidationConfig) -> Self {
        Self {
            gatekeeper: Gatekeeper::new(validation),
        }
    }

    /// Create a chaincode from a loaded configuration
    pub fn from_config(config: &ChaincodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.validation_config()?))
    }

    /// Active validation rules
    pub fn validation(&self) -> &ValidationConfig {
        self.gatekeeper.config()
    }

    /// Handle the host's `init` call
    ///
    /// No schema exists to set up, so this succeeds for any arguments and
    /// touches no state.
    pub fn init<S>(&self, _state: &mut S, args: &[Vec<u8>]) -> Response
    where
        S: StateStore,
        S::Error: Display,
    {
        debug!("init called with {} arguments", args.len());
        Response::success(Vec::new())
    }

    /// Handle a host invocation of `function` with `args`
    pub fn invoke<S>(&self, state: &mut S, function: &str, args: &[Vec<u8>]) -> Response
    where
        S: StateStore,
        S::Error: Display,
    {
        let operation = Operation::parse(function);
        self.dispatch(state, &operation, args).into()
    }

    /// Handle a flat `[function, arg0, ...]` argument vector
    pub fn invoke_args<S>(&self, state: &mut S, args: &[Vec<u8>]) -> Response
    where
        S: StateStore,
        S::Error: Display,
    {
        let invocation = Invocation::from_args(args);
        self.dispatch(state, &invocation.operation, &invocation.args).into()
    }

    /// Read and decode the record stored under `key`
    pub fn get_record<S>(
        &self,
        state: &mut S,
        key: &str,
    ) -> Result<ProvenanceRecord, ChaincodeError>
    where
        S: StateStore,
        S::Error: Display,
    {
        Ok(Ledger::new(state).get_record(key)?)
    }

    fn dispatch<S>(
        &self,
        state: &mut S,
        operation: &Operation,
        args: &[Vec<u8>],
    ) -> Result<Vec<u8>, ChaincodeError>
    where
        S: StateStore,
        S::Error: Display,
    {
        debug!("Dispatching {} with {} arguments", operation.as_str(), args.len());

        let result = match operation {
            Operation::Init => Ok(self.init(state, args).payload),
            Operation::Set => self.handle_set(state, args),
            Operation::Get => self.handle_get(state, args),
            Operation::Unknown(name) => Err(ChaincodeError::MalformedInvocation(format!(
                "unknown function '{}', expected one of init, set, get",
                name
            ))),
        };

        if let Err(e) = &result {
            warn!("{} failed ({}): {}", operation.as_str(), e.kind(), e);
        }

        result
    }

    fn handle_set<S>(&self, state: &mut S, args: &[Vec<u8>]) -> Result<Vec<u8>, ChaincodeError>
    where
        S: StateStore,
        S::Error: Display,
    {
        let args = decode_args(args)?;
        let record = self.gatekeeper.admit(args.as_slice())?;

        Ledger::new(state).put_record(&record)?;

        info!(
            "Stored provenance for {} (action: {}, digests: {})",
            record.key,
            record.action,
            record.digests.len()
        );

        Ok(Vec::new())
    }

    fn handle_get<S>(&self, state: &mut S, args: &[Vec<u8>]) -> Result<Vec<u8>, ChaincodeError>
    where
        S: StateStore,
        S::Error: Display,
    {
        let args = decode_args(args)?;
        let key = match args.as_slice() {
            [key] if !key.is_empty() => key,
            [_] => {
                return Err(ChaincodeError::MalformedInvocation("key is empty".to_string()));
            }
            _ => {
                return Err(ChaincodeError::MalformedInvocation(format!(
                    "get expects exactly 1 argument (key), got {}",
                    args.len()
                )));
            }
        };

        let ledger = Ledger::new(state);
        let bytes = ledger
            .get(key)?
            .ok_or_else(|| ChaincodeError::NotFound(key.clone()))?;

        // Refuse to hand out bytes that do not decode to this key's record
        codec::decode_record_for(key, &bytes)?;

        Ok(bytes)
    }
}

impl Default for ProvenanceChaincode {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
