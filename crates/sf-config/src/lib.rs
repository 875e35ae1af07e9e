//! snapfacts policy loading and validation.
//!
//! This crate provides:
//! - The typed resolver policy (marker packages, signing keys, thresholds)
//! - Policy path resolution (explicit → env → XDG → system → defaults)
//! - Semantic validation of loaded policies

pub mod load;
pub mod policy;
pub mod resolve;
pub mod validate;

pub use load::{load_policy, load_policy_file, LoadedPolicy};
pub use policy::Policy;
pub use resolve::{resolve_policy_path, ConfigSource, PolicyPath, SearchLocations};
pub use validate::{validate_policy, ValidationError, ValidationResult};

/// Schema version for policy files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
