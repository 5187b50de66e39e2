//! Effective dependency tree engine.
//!
//! Mimics Node's hierarchical module lookup to decide, for every declared
//! dependency, which physical package actually satisfies it, and assembles
//! the answers into one logical tree per root manifest. Circular references
//! become first-class terminal nodes instead of errors.

pub mod candidates;
pub mod resolver;
pub mod tree;
