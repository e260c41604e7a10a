//! Shared test utilities for lsline integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every parser built here is pinned to
//! [`REFERENCE_DATE`] so year inference is deterministic.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
