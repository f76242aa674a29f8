//! Invocation function names

/// Operation selected by an invocation's function name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `init`
    Init,
    /// `set`
    Set,
    /// `get`
    Get,
    /// Any other function name
    Unknown(String),
}

impl Operation {
    /// Resolve a function name; matching is exact
    pub fn parse(function: &str) -> Self {
        match function {
            "init" => Operation::Init,
            "set" => Operation::Set,
            "get" => Operation::Get,
            other => Operation::Unknown(other.to_string()),
        }
    }

    /// Function name as seen on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Operation::Init => "init",
            Operation::Set => "set",
            Operation::Get => "get",
            Operation::Unknown(name) => name,
        }
    }
}

/// Function name plus parameters, split from a flat host argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Resolved operation
    pub operation: Operation,
    /// Arguments after the function name
    pub args: Vec<Vec<u8>>,
}

impl Invocation {
    /// Split `[function, arg0, arg1, ...]`
    ///
    /// An empty vector or a non-UTF-8 function name resolves to an unknown
    /// operation.
    pub fn from_args(args: &[Vec<u8>]) -> Self {
        match args.split_first() {
            Some((function, rest)) => Self {
                operation: Operation::parse(&String::from_utf8_lossy(function)),
                args: rest.to_vec(),
            },
            None => Self {
                operation: Operation::Unknown(String::new()),
                args: Vec::new(),
            },
        }
    }
}
