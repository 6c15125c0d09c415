//! # Taskdeck Common
//!
//! Foundational types and utilities shared across the taskdeck crates.
//! This is the base dependency of the workspace: it carries the pieces that
//! every other crate agrees on so they never diverge.
//!
//! ## Modules
//!
//! - [`error`] - Error severity classification shared by all error enums
//! - [`ulid_generator`] - Monotonic ULID generation for entity identifiers

pub mod error;
pub mod ulid_generator;

// Re-export the common vocabulary so downstream crates can use
// `taskdeck_common::Severity` without spelling out the module path.
pub use error::{ErrorSeverity, Severity};
pub use ulid_generator::{generate_monotonic_ulid, generate_monotonic_ulid_string};
