//! Policy validation errors and semantic validation.

use crate::policy::Policy;
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Policy loading and validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate a policy semantically.
pub fn validate_policy(policy: &Policy) -> ValidationResult<()> {
    if policy.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: policy.schema_version.clone(),
        });
    }

    if !(0.0..1.0).contains(&policy.faulty_threshold) {
        return Err(ValidationError::InvalidValue {
            field: "faulty_threshold".to_string(),
            message: format!("Must be in [0, 1), got {}", policy.faulty_threshold),
        });
    }

    if policy.marker_packages.is_empty() {
        return Err(ValidationError::SemanticError(
            "marker_packages must name at least one package".to_string(),
        ));
    }

    if policy.vendor_aliases.iter().all(|a| a.trim().is_empty()) {
        return Err(ValidationError::SemanticError(
            "vendor_aliases must contain at least one non-empty alias".to_string(),
        ));
    }

    for (idx, key) in policy.redhat_signing_keys.iter().enumerate() {
        if key.len() != 16 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidValue {
                field: format!("redhat_signing_keys[{}]", idx),
                message: format!("Must be 16 hex digits, got {:?}", key),
            });
        }
    }

    Ok(())
}
