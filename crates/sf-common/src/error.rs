//! Error types for snapfacts.
//!
//! Every error has a stable numeric code and a category. Parsers report
//! "nothing here I recognise" as [`Error::Skip`], which callers treat as an
//! absent source rather than a failure.

use crate::fact::FactKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse grouping of error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Artifact text did not match a recognised grammar.
    Parse,
    /// Locating artifacts inside a snapshot.
    Collection,
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorCategory::Parse => "parse",
            ErrorCategory::Collection => "collection",
            ErrorCategory::Io => "io",
        })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    // 20-29: artifact parsing
    #[error("{kind} skipped: {reason}")]
    Skip { kind: FactKind, reason: String },

    #[error("{kind} parse failed: {message}")]
    Parse { kind: FactKind, message: String },

    // 30-39: snapshot access
    #[error("snapshot root not found: {0}")]
    SnapshotNotFound(String),

    // 60-69
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn skip(kind: FactKind, reason: impl Into<String>) -> Self {
        Error::Skip {
            kind,
            reason: reason.into(),
        }
    }

    pub fn parse(kind: FactKind, message: impl Into<String>) -> Self {
        Error::Parse {
            kind,
            message: message.into(),
        }
    }

    /// Stable code: 20-29 parse, 30-39 collection, 60-69 I/O.
    pub fn code(&self) -> u32 {
        match self {
            Error::Skip { .. } => 20,
            Error::Parse { .. } => 21,
            Error::SnapshotNotFound(_) => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Skip { .. } | Error::Parse { .. } => ErrorCategory::Parse,
            Error::SnapshotNotFound(_) => ErrorCategory::Collection,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Whether this only marks a source with nothing recognisable in it.
    pub fn is_skip(&self) -> bool {
        matches!(self, Error::Skip { .. })
    }

    /// The fact kind a parse error concerns.
    pub fn fact_kind(&self) -> Option<FactKind> {
        match self {
            Error::Skip { kind, .. } | Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
