//! Invocation response returned to the host

use crate::ChaincodeError;

/// Status code of a successful invocation
pub const OK: i32 = 200;

/// Status code of a failed invocation
pub const ERROR: i32 = 500;

/// Outcome of one `init` or `invoke` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// `OK` or `ERROR`
    pub status: i32,
    /// Human-readable failure message, empty on success
    pub message: String,
    /// Result bytes (the encoded record for `get`)
    pub payload: Vec<u8>,
}

impl Response {
    /// Create a success response
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Whether the invocation succeeded
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }
}

impl From<Result<Vec<u8>, ChaincodeError>> for Response {
    fn from(result: Result<Vec<u8>, ChaincodeError>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(e) => Response::error(e.to_string()),
        }
    }
}
