use crate::{
    db::{
        cursor::{ExecutionError, ScanError},
        response::ResponseError,
    },
    error::{ErrorClass, ErrorOrigin},
};
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Value-level failure of a query call. Executor and scan failures pass
/// through unchanged; cardinality failures come from the session.
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("{0}")]
    Execute(#[from] ExecutionError),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Response(#[from] ResponseError),
}

impl QueryError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Execute(err) => err.class(),
            Self::Scan(_) => ErrorClass::Conversion,
            Self::Response(err) => err.class(),
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Execute(_) => ErrorOrigin::Executor,
            Self::Scan(_) => ErrorOrigin::Scan,
            Self::Response(_) => ErrorOrigin::Response,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Response(ResponseError::NotFound { .. }))
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {self}", self.origin(), self.class())
    }
}
