//! Core runtime for miniorm: record traits, values, model descriptors, the
//! frozen model registry, row materialization and the typed query session.
#![warn(unreachable_pub)]

extern crate self as miniorm;

// public exports are one module level down
pub mod db;
pub mod error;
pub mod model;
pub mod obs;
pub mod traits;
pub mod value;

pub use miniorm_primitives::naming;

// test
#[cfg(test)]
#[allow(unreachable_pub)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{Db, DbSession, ModelRegistry, ModelRegistryBuilder, Response},
        model::{FieldPath, ModelDescriptor},
        traits::{FieldBinder as _, Record, ScanTarget as _},
        value::Value,
    };
}
