//! Runtime model definitions.
//!
//! `#[derive(Record)]` decides *what maps*: the column keys of a record type
//! and the field each one addresses. Types in `model` hold the result of that
//! walk once it has been registered, and are what row materialization reads.
mod descriptor;
mod field;

pub use descriptor::ModelDescriptor;
pub use field::{FieldMap, FieldPath};
