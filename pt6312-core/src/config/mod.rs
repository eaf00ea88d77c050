//! Configuration types
//!
//! Replaces the compile-time display constants of a typical VFD sketch
//! with a validated runtime structure, optionally loaded through serde.

pub mod types;

pub use types::*;
