//! Shared utilities for efftree.
//!
//! This crate provides cross-cutting concerns used by all other efftree
//! crates: error types, filesystem helpers, and diagnostics sinks for
//! non-fatal resolution warnings.

pub mod diagnostics;
pub mod errors;
pub mod fs;
