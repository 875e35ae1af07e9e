//! snapfacts common types and errors.
//!
//! This crate provides foundational types shared across the snapfacts crates:
//! - The kinds of evidence facts harvested from a system snapshot
//! - Common error types with stable codes

pub mod error;
pub mod fact;

pub use error::{Error, ErrorCategory, Result};
pub use fact::FactKind;
