//! In-memory executor returning canned result sets keyed by query text.
//! Used by tests and by applications exercising their models without a
//! database.

use crate::{
    db::cursor::{Destinations, ExecutionError, Executor, RowCursor, ScanError},
    value::Value,
};
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

///
/// ResultSet
///

#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    interrupt: Option<Interrupt>,
}

#[derive(Clone, Debug)]
struct Interrupt {
    after_rows: usize,
    message: String,
    cancelled: bool,
}

impl ResultSet {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Append one row. Cells are not checked against the column count here;
    /// a mismatch surfaces as a scan error, as it would from a driver.
    #[must_use]
    pub fn row<V: Into<Value>>(mut self, cells: impl IntoIterator<Item = V>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Fail iteration with a driver error once `after_rows` rows were read.
    #[must_use]
    pub fn fail_after(mut self, after_rows: usize, message: impl Into<String>) -> Self {
        self.interrupt = Some(Interrupt {
            after_rows,
            message: message.into(),
            cancelled: false,
        });
        self
    }

    /// Cancel iteration once `after_rows` rows were read.
    #[must_use]
    pub fn cancel_after(mut self, after_rows: usize) -> Self {
        self.interrupt = Some(Interrupt {
            after_rows,
            message: "query cancelled".to_string(),
            cancelled: true,
        });
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

///
/// ExecutedQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct ExecutedQuery {
    pub query: String,
    pub args: Vec<Value>,
}

///
/// MemoryExecutor
///

#[derive(Debug, Default)]
pub struct MemoryExecutor {
    results: HashMap<String, ResultSet>,
    failures: HashMap<String, String>,
    executed: Mutex<Vec<ExecutedQuery>>,
}

impl MemoryExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_result(mut self, query: impl Into<String>, result: ResultSet) -> Self {
        self.results.insert(query.into(), result);
        self
    }

    /// Make `query` fail at execution time.
    #[must_use]
    pub fn with_failure(mut self, query: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(query.into(), message.into());
        self
    }

    /// Every query executed so far, in order.
    #[must_use]
    pub fn executed(&self) -> Vec<ExecutedQuery> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Executor for MemoryExecutor {
    type Cursor<'a>
        = MemoryCursor<'a>
    where
        Self: 'a;

    fn execute<'a>(
        &'a self,
        query: &str,
        args: &[Value],
    ) -> Result<Self::Cursor<'a>, ExecutionError> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ExecutedQuery {
                query: query.to_string(),
                args: args.to_vec(),
            });

        if let Some(message) = self.failures.get(query) {
            return Err(ExecutionError::new(message.clone()));
        }

        let result = self
            .results
            .get(query)
            .ok_or_else(|| ExecutionError::new(format!("no result set for query: {query}")))?;

        Ok(MemoryCursor::new(result))
    }
}

///
/// MemoryCursor
///

pub struct MemoryCursor<'a> {
    result: &'a ResultSet,
    // rows consumed so far; the current row is `read - 1`
    read: usize,
}

impl<'a> MemoryCursor<'a> {
    #[must_use]
    pub const fn new(result: &'a ResultSet) -> Self {
        Self { result, read: 0 }
    }
}

impl RowCursor for MemoryCursor<'_> {
    fn columns(&self) -> Result<Vec<String>, ExecutionError> {
        Ok(self.result.columns.clone())
    }

    fn next_row(&mut self) -> Result<bool, ExecutionError> {
        if let Some(interrupt) = &self.result.interrupt
            && interrupt.after_rows == self.read
        {
            return Err(if interrupt.cancelled {
                ExecutionError::cancelled(interrupt.message.clone())
            } else {
                ExecutionError::new(interrupt.message.clone())
            });
        }

        if self.read >= self.result.rows.len() {
            return Ok(false);
        }

        self.read += 1;
        Ok(true)
    }

    fn scan(&mut self, dests: &mut Destinations<'_>) -> Result<(), ScanError> {
        let Some(row) = self.read.checked_sub(1).and_then(|i| self.result.rows.get(i)) else {
            return Err(ScanError::Driver("scan called without a current row".to_string()));
        };

        dests.write_row(row.iter().cloned())
    }
}
