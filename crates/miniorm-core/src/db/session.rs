use crate::{
    db::{
        Db,
        cursor::{Executor, RowCursor},
        materialize::RowMaterializer,
        query::QueryError,
        response::Response,
    },
    model::ModelDescriptor,
    obs::trace::{QueryMode, QueryTraceEvent, QueryTraceSink, emit},
    traits::Record,
    value::Value,
};
use std::any::type_name;

///
/// DbSession
///
/// Call-scoped handle with policy (debug, tracing) over a frozen `Db`.
/// Each call runs one query to completion on the calling thread; nothing is
/// visible to the caller until the full result set has been materialized.
///

pub struct DbSession<'a, X: Executor> {
    db: &'a Db<X>,
    debug: bool,
    trace: Option<&'static dyn QueryTraceSink>,
}

impl<'a, X: Executor> DbSession<'a, X> {
    #[must_use]
    pub const fn new(db: &'a Db<X>) -> Self {
        Self {
            db,
            debug: false,
            trace: None,
        }
    }

    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    #[must_use]
    pub const fn trace_sink(mut self, sink: &'static dyn QueryTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    // ---------------------------------------------------------------------
    // Query entry points
    // ---------------------------------------------------------------------

    /// Every row, in cursor order.
    pub fn query_all<R: Record>(
        &self,
        query: &str,
        args: &[Value],
    ) -> Result<Response<R>, QueryError> {
        self.run(QueryMode::All, query, args, Ok)
    }

    /// The first row. More than one row is not an error.
    pub fn query_first<R: Record>(&self, query: &str, args: &[Value]) -> Result<R, QueryError> {
        self.run(QueryMode::First, query, args, |response| {
            response.first().map_err(QueryError::from)
        })
    }

    /// The only row. Zero rows is `NotFound`, several is `NotUnique`.
    pub fn query_unique<R: Record>(&self, query: &str, args: &[Value]) -> Result<R, QueryError> {
        self.run(QueryMode::Unique, query, args, |response| {
            response.one().map_err(QueryError::from)
        })
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    // Shared wrapper keeps tracing and debug output uniform across modes.
    fn run<R: Record, T>(
        &self,
        mode: QueryMode,
        query: &str,
        args: &[Value],
        shape: impl FnOnce(Response<R>) -> Result<T, QueryError>,
    ) -> Result<T, QueryError> {
        let model = type_name::<R>();
        let descriptor = self.db.registry().expect::<R>();

        emit(self.trace, QueryTraceEvent::Start { model, mode });

        let result = self.execute::<R>(descriptor, query, args).and_then(|response| {
            let rows = response.count() as u64;
            shape(response).map(|value| (value, rows))
        });

        match result {
            Ok((value, rows)) => {
                emit(self.trace, QueryTraceEvent::Finish { model, mode, rows });
                Ok(value)
            }
            Err(err) => {
                self.debug_log(format!("{mode:?} {model} failed: {}", err.display_with_class()));
                emit(
                    self.trace,
                    QueryTraceEvent::Error {
                        model,
                        mode,
                        class: err.class(),
                    },
                );
                Err(err)
            }
        }
    }

    fn execute<R: Record>(
        &self,
        descriptor: &ModelDescriptor,
        query: &str,
        args: &[Value],
    ) -> Result<Response<R>, QueryError> {
        self.debug_log(format!(
            "query on '{}' with {} args: {query}",
            descriptor.relation(),
            args.len()
        ));

        let mut cursor = self.db.executor().execute(query, args)?;
        let materializer = RowMaterializer::<R>::new(descriptor, cursor.columns()?);

        let plan = materializer.plan();
        if plan.mapped() < plan.columns().len() {
            self.debug_log(format!(
                "discarding {} unmapped columns for {}",
                plan.columns().len() - plan.mapped(),
                descriptor.type_name()
            ));
        }

        if materializer.nullable() > 0 {
            self.debug_log(format!(
                "pre-allocating {} nullable destinations per row",
                materializer.nullable()
            ));
        }

        let mut rows = Vec::with_capacity(16);
        while cursor.next_row()? {
            let mut row = materializer.row();
            cursor.scan(&mut row.destinations())?;
            rows.push(row.finish());
        }

        self.debug_log(format!("materialized {} rows", rows.len()));

        Ok(Response(rows))
    }
}
