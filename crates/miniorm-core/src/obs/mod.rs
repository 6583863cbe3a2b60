//! Observability boundary.
//!
//! Instrumentation is optional, injected by the caller, and never affects the
//! result of a query.
pub mod trace;
