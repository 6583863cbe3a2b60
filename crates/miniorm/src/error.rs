use miniorm_core::{
    db::{QueryError, ResponseError},
    error::ErrorOrigin as CoreErrorOrigin,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::Query(QueryErrorKind::NotFound))
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        let origin = err.origin().into();

        match err {
            QueryError::Execute(inner) if inner.is_cancelled() => Self::new(
                ErrorKind::Executor(ExecutorErrorKind::Cancelled),
                origin,
                inner.to_string(),
            ),

            QueryError::Execute(inner) => Self::new(
                ErrorKind::Executor(ExecutorErrorKind::Failed),
                origin,
                inner.to_string(),
            ),

            QueryError::Scan(inner) => Self::new(ErrorKind::Scan, origin, inner.to_string()),

            QueryError::Response(inner) => inner.into(),
        }
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        let kind = match err {
            ResponseError::NotFound { .. } => QueryErrorKind::NotFound,
            ResponseError::NotUnique { .. } => QueryErrorKind::NotUnique,
        };

        Self::new(ErrorKind::Query(kind), ErrorOrigin::Response, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Query(QueryErrorKind),
    Executor(ExecutorErrorKind),

    /// A cell could not be converted into its field.
    Scan,
}

///
/// QueryErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QueryErrorKind {
    /// Valid query, but no rows matched.
    NotFound,

    /// A single row was required but several matched.
    NotUnique,
}

///
/// ExecutorErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ExecutorErrorKind {
    Failed,
    Cancelled,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Executor,
    Scan,
    Response,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Executor => Self::Executor,
            CoreErrorOrigin::Scan => Self::Scan,
            CoreErrorOrigin::Response => Self::Response,
        }
    }
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

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use miniorm_core::db::{ExecutionError, ScanError};

    #[test]
    fn response_errors_keep_their_kind() {
        let err: Error = QueryError::from(ResponseError::NotUnique {
            model: "app::User",
            count: 2,
        })
        .into();

        assert_eq!(err.kind, ErrorKind::Query(QueryErrorKind::NotUnique));
        assert_eq!(err.origin, ErrorOrigin::Response);
        assert!(err.message.contains("found 2"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn cancellation_is_distinguished_from_failure() {
        let cancelled: Error = QueryError::from(ExecutionError::cancelled("deadline")).into();
        let failed: Error = QueryError::from(ExecutionError::new("boom")).into();

        assert_eq!(cancelled.kind, ErrorKind::Executor(ExecutorErrorKind::Cancelled));
        assert_eq!(failed.kind, ErrorKind::Executor(ExecutorErrorKind::Failed));
        assert_eq!(failed.origin, ErrorOrigin::Executor);
        assert_eq!(failed.to_string(), "boom");
    }

    #[test]
    fn errors_serialize_with_kind_and_origin() {
        let err: Error = QueryError::from(ScanError::Driver("bad cell".into())).into();
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "Scan");
        assert_eq!(json["origin"], "Scan");
        assert_eq!(json["message"], "driver scan failed: bad cell");
    }
}
