//! snapfacts core library
//!
//! This library provides:
//! - Evidence parsers turning snapshot artifacts into typed facts
//! - The OS identity resolver arbitrating between those facts
//! - Artifact collection from extracted snapshot directories
//! - Structured logging and JSON schemas for the verdict

pub mod collect;
pub mod facts;
pub mod logging;
pub mod resolve;
pub mod schema;

pub use facts::{
    BootLogFact, KernelFact, OsReleaseFact, PackageInventory, PackageRecord, RedhatReleaseFact,
};
pub use resolve::{resolve, FactSet, Release, Resolver, Verdict};
pub use sf_common::{Error, FactKind, Result};
