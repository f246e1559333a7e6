//! Test helpers shared across crates.
//!
//! This crate currently provides scoped environment variable overrides.

pub mod env;
