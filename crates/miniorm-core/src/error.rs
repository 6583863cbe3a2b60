use std::fmt;

///
/// ErrorClass
/// Runtime error taxonomy for classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// The query executor failed (connectivity, syntax, constraints).
    Execution,
    /// A cell could not be written into its destination.
    Conversion,
    NotFound,
    /// More rows than the call allows.
    Conflict,
    /// Cancelled or timed out by the executor.
    Cancelled,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Execution => "execution",
            Self::Conversion => "conversion",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Runtime origin taxonomy for classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Executor,
    Scan,
    Response,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Executor => "executor",
            Self::Scan => "scan",
            Self::Response => "response",
        };
        write!(f, "{label}")
    }
}
