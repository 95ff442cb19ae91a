//! Core Kernel - Foundational types for the quoting workspace
//!
//! This crate provides the building blocks shared by the pricing domain and
//! the HTTP layer:
//! - Money and rate types with precise decimal arithmetic
//! - Identifiers for quotes and comparisons

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{QuoteId, ComparisonId};
pub use error::CoreError;
