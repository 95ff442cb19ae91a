//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! PataBima quoting test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built amounts, forms and JSON payloads
//! - `builders`: Quote request builder with reference defaults
//! - `assertions`: Custom assertion helpers for quote types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
