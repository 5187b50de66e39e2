//! Core data types for efftree.
//!
//! This crate defines the fundamental types that represent an npm-style
//! project: `package.json` manifest parsing, package identities, and user
//! configuration.
//!
//! This crate is intentionally free of resolution logic and terminal I/O.

pub mod config;
pub mod manifest;
pub mod package;
