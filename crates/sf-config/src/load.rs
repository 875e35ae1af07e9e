//! Policy loading.

use crate::policy::Policy;
use crate::resolve::{resolve_policy_path, ConfigSource};
use crate::validate::{validate_policy, ValidationError, ValidationResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A validated policy along with where it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedPolicy {
    pub policy: Policy,
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

/// Resolve, read and validate the resolver policy.
///
/// When no policy file is found the built-in defaults are returned.
pub fn load_policy(explicit: Option<&Path>) -> ValidationResult<LoadedPolicy> {
    let resolved = resolve_policy_path(explicit);
    let policy = match &resolved.path {
        Some(path) => load_policy_file(path)?,
        None => Policy::default(),
    };
    debug!(
        target: "config.policy_loaded",
        source = %resolved.source,
        path = ?resolved.path,
        "resolver policy loaded"
    );
    Ok(LoadedPolicy {
        policy,
        path: resolved.path,
        source: resolved.source,
    })
}

/// Read and validate a single policy file.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn load_policy_file(path: &Path) -> ValidationResult<Policy> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let policy: Policy = if is_toml {
        toml::from_str(&content)
            .map_err(|e| ValidationError::ParseError(format!("{}: {}", path.display(), e)))?
    } else {
        serde_json::from_str(&content)
            .map_err(|e| ValidationError::ParseError(format!("{}: {}", path.display(), e)))?
    };

    validate_policy(&policy)?;
    Ok(policy)
}
