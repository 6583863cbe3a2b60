//! Executor boundary.
//!
//! miniorm never opens connections or runs statements itself. It consumes an
//! [`Executor`] that turns query text plus positional arguments into a
//! [`RowCursor`], and scans each row into positionally aligned
//! [`Destinations`].

use crate::{
    error::ErrorClass,
    model::FieldPath,
    traits::{FieldBinder, ValueError},
    value::Value,
};
use std::error::Error as StdError;
use thiserror::Error as ThisError;

///
/// ExecutionError
///
/// Opaque executor failure (connectivity, syntax, constraint violations,
/// cancellation). Surfaced to callers unchanged.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct ExecutionError {
    message: String,
    cancelled: bool,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cancelled: false,
            source: None,
        }
    }

    /// Wrap a driver error, keeping it as the `source`.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            cancelled: false,
            source: Some(source.into()),
        }
    }

    /// Failure caused by the executor's own cancellation or timeout.
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cancelled: true,
            source: None,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub(crate) const fn class(&self) -> ErrorClass {
        if self.cancelled {
            ErrorClass::Cancelled
        } else {
            ErrorClass::Execution
        }
    }
}

///
/// ScanError
/// A row could not be written into its destinations.
///

#[derive(Debug, ThisError)]
pub enum ScanError {
    #[error("column '{column}': {source}")]
    Value {
        column: String,
        #[source]
        source: ValueError,
    },

    #[error("row has {found} cells, expected {expected}")]
    ColumnCount { expected: usize, found: usize },

    #[error("driver scan failed: {0}")]
    Driver(String),
}

///
/// RowCursor
///
/// Sequential, stateful handle over one result set.
///

pub trait RowCursor {
    /// Column identifiers of the active result set, in order.
    fn columns(&self) -> Result<Vec<String>, ExecutionError>;

    /// Advance to the next row; `false` once exhausted. Iteration failures
    /// reported by the driver surface here.
    fn next_row(&mut self) -> Result<bool, ExecutionError>;

    /// Write every cell of the current row into `dests`, by position.
    fn scan(&mut self, dests: &mut Destinations<'_>) -> Result<(), ScanError>;
}

///
/// Executor
///
/// Query execution entry point supplied by the host application.
///

pub trait Executor: Send + Sync {
    type Cursor<'a>: RowCursor
    where
        Self: 'a;

    fn execute<'a>(&'a self, query: &str, args: &[Value])
    -> Result<Self::Cursor<'a>, ExecutionError>;
}

///
/// Slot
///
/// What one result column is bound to.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Slot {
    Field(FieldPath),
    /// Unmapped column: read and dropped.
    Discard,
}

///
/// Destinations
///
/// Per-column write destinations for one row, aligned with the column list.
///

pub struct Destinations<'a> {
    record: &'a mut dyn FieldBinder,
    columns: &'a [String],
    slots: &'a [Slot],
}

impl<'a> Destinations<'a> {
    pub(crate) fn new(
        record: &'a mut dyn FieldBinder,
        columns: &'a [String],
        slots: &'a [Slot],
    ) -> Self {
        debug_assert_eq!(columns.len(), slots.len());

        Self {
            record,
            columns,
            slots,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Write `value` into the destination for column `index`.
    /// Discard destinations accept and drop anything.
    pub fn write(&mut self, index: usize, value: Value) -> Result<(), ScanError> {
        let (columns, slots) = (self.columns, self.slots);
        let Some(slot) = slots.get(index) else {
            return Err(ScanError::ColumnCount {
                expected: slots.len(),
                found: index + 1,
            });
        };

        let Slot::Field(path) = slot else {
            return Ok(());
        };

        let Some(target) = self.record.field_mut(path) else {
            panic!(
                "internal invariant violated: field path {path} for column '{}' does not resolve",
                columns[index]
            );
        };

        target
            .scan_value(value)
            .map_err(|source| ScanError::Value {
                column: columns[index].clone(),
                source,
            })
    }

    /// Write a full row of cells, checking the cell count first.
    pub fn write_row(&mut self, cells: impl IntoIterator<Item = Value>) -> Result<(), ScanError> {
        let cells: Vec<Value> = cells.into_iter().collect();
        if cells.len() != self.slots.len() {
            return Err(ScanError::ColumnCount {
                expected: self.slots.len(),
                found: cells.len(),
            });
        }

        for (index, value) in cells.into_iter().enumerate() {
            self.write(index, value)?;
        }

        Ok(())
    }
}
