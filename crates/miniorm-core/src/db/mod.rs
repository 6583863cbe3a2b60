pub mod cursor;
pub mod materialize;
pub mod memory;
pub mod query;
pub mod registry;
pub mod response;
pub mod session;


pub use cursor::{Destinations, ExecutionError, Executor, RowCursor, ScanError, Slot};
pub use materialize::{PendingRow, RowMaterializer, ScanPlan};
pub use query::QueryError;
pub use registry::{ModelRegistry, ModelRegistryBuilder};
pub use response::{Response, ResponseError};
pub use session::DbSession;

use std::sync::Arc;

///
/// Db
///
/// A frozen model registry paired with the executor queries run against.
/// Share it by reference (or in an `Arc`) across request handlers.
///

pub struct Db<X: Executor> {
    registry: Arc<ModelRegistry>,
    executor: X,
}

impl<X: Executor> Db<X> {
    #[must_use]
    pub const fn new(registry: Arc<ModelRegistry>, executor: X) -> Self {
        Self { registry, executor }
    }

    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn executor(&self) -> &X {
        &self.executor
    }

    #[must_use]
    pub const fn session(&self) -> DbSession<'_, X> {
        DbSession::new(self)
    }
}
