//! ## Crate layout
//! - `core`: runtime values, record traits, model registry, row
//!   materialization and the typed query session.
//! - `error`: stable public error type.
//! - `Record`: derive macro generating a record's column index and field
//!   binder at compile time.
//!
//! Declare models once, freeze the registry, then query:
//!
//! ```
//! use miniorm::{
//!     db::memory::{MemoryExecutor, ResultSet},
//!     prelude::*,
//! };
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! pub struct User {
//!     pub id: i64,
//!     #[column(rename = "display_name")]
//!     pub name: String,
//! }
//!
//! let query = "SELECT * FROM users WHERE id = ?";
//! let executor = MemoryExecutor::new().with_result(
//!     query,
//!     ResultSet::new(["users.id", "display_name"]).row([Value::Int(7), "Ada".into()]),
//! );
//!
//! let mut models = ModelRegistryBuilder::new();
//! models.register::<User>("users");
//! let db = Db::new(models.freeze(), executor);
//!
//! let user: User = db.session().query_unique(query, &[Value::Int(7)])?;
//! assert_eq!(user, User { id: 7, name: "Ada".into() });
//! # Ok::<(), miniorm::Error>(())
//! ```
//!
//! ## Registration lifecycle
//!
//! `freeze` consumes the builder, so nothing can be registered afterwards:
//!
//! ```compile_fail
//! use miniorm::prelude::*;
//!
//! #[derive(Default, Record)]
//! pub struct Item {
//!     pub id: i64,
//! }
//!
//! let mut models = ModelRegistryBuilder::new();
//! let _registry = models.freeze();
//! models.register::<Item>("items");
//! ```
//!
//! Queries need the frozen registry; a builder is not accepted in its place:
//!
//! ```compile_fail
//! use miniorm::{db::memory::MemoryExecutor, prelude::*};
//!
//! #[derive(Default, Record)]
//! pub struct Item {
//!     pub id: i64,
//! }
//!
//! let mut models = ModelRegistryBuilder::new();
//! models.register::<Item>("items");
//! let db = Db::new(models, MemoryExecutor::new());
//! let _items: Response<Item> = db.session().query_all("SELECT * FROM items", &[]).unwrap();
//! ```
//!
//! ## Column attributes
//!
//! `flatten` embeds a record's columns and takes no key of its own, so it
//! cannot be combined with `rename`:
//!
//! ```compile_fail
//! use miniorm::prelude::*;
//!
//! #[derive(Default, Record)]
//! pub struct Audit {
//!     pub created_by: String,
//! }
//!
//! #[derive(Default, Record)]
//! pub struct Account {
//!     pub id: i64,
//!     #[column(flatten, rename = "audit")]
//!     pub audit: Audit,
//! }
//! ```
//!
//! nor with `skip`:
//!
//! ```compile_fail
//! use miniorm::prelude::*;
//!
//! #[derive(Default, Record)]
//! pub struct Audit {
//!     pub created_by: String,
//! }
//!
//! #[derive(Default, Record)]
//! pub struct Account {
//!     pub id: i64,
//!     #[column(flatten, skip)]
//!     pub audit: Audit,
//! }
//! ```
//!
//! A `rename` must name a column:
//!
//! ```compile_fail
//! use miniorm::prelude::*;
//!
//! #[derive(Default, Record)]
//! pub struct Account {
//!     #[column(rename = " ")]
//!     pub id: i64,
//! }
//! ```

pub use miniorm_core as core;

pub mod error;

// generated code paths resolve through these
pub use miniorm_core::{db, model, naming, obs, traits, value};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;
pub use miniorm_derive::Record;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        Error, Record,
        core::{
            db::{Db, DbSession, ModelRegistryBuilder, Response},
            traits::{FieldBinder as _, Record, ScanTarget as _},
            value::Value,
        },
    };
}
