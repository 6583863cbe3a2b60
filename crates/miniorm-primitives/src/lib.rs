//! Dependency-free naming primitives shared by the runtime and the derive macro.
//!
//! Both sides must agree on column keys byte for byte: the derive crate bakes
//! keys into generated code at compile time, and the runtime normalizes the
//! column identifiers a query engine reports before looking them up.

pub mod naming;

pub use naming::{normalize_column, snake_case};
