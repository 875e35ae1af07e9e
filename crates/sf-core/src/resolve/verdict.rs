//! The resolver's output.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Canonical release family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Release {
    Rhel,
    CentOs,
    Fedora,
    Oracle,
    Suse,
    Rocky,
    AlmaLinux,
    Miracle,
    Unknown,
    /// A distribution outside the fixed vocabulary, named by its first word.
    Other(String),
}

impl Release {
    /// Every member of the fixed vocabulary.
    pub const KNOWN: [Release; 9] = [
        Release::Rhel,
        Release::CentOs,
        Release::Fedora,
        Release::Oracle,
        Release::Suse,
        Release::Rocky,
        Release::AlmaLinux,
        Release::Miracle,
        Release::Unknown,
    ];

    pub fn label(&self) -> &str {
        match self {
            Release::Rhel => "RHEL",
            Release::CentOs => "CentOS",
            Release::Fedora => "Fedora",
            Release::Oracle => "Oracle",
            Release::Suse => "SUSE",
            Release::Rocky => "Rocky",
            Release::AlmaLinux => "AlmaLinux",
            Release::Miracle => "Miracle",
            Release::Unknown => "Unknown",
            Release::Other(word) => word,
        }
    }

    /// Inverse of [`label`](Self::label); unknown labels become `Other`.
    pub fn from_label(label: &str) -> Release {
        let label = label.trim();
        if label.is_empty() {
            return Release::Unknown;
        }
        Release::KNOWN
            .iter()
            .find(|r| r.label() == label)
            .cloned()
            .unwrap_or_else(|| Release::Other(label.to_string()))
    }

    pub fn is_rhel(&self) -> bool {
        matches!(self, Release::Rhel)
    }

    /// A named distribution other than RHEL.
    pub fn is_specific(&self) -> bool {
        !matches!(self, Release::Rhel | Release::Unknown)
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Release {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Release {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Release::from_label(&label))
    }
}

/// One diagnostic value: a single string or a list of identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ReasonValue {
    Text(String),
    List(Vec<String>),
}

impl ReasonValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ReasonValue::Text(s) => Some(s),
            ReasonValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ReasonValue::List(items) => Some(items),
            ReasonValue::Text(_) => None,
        }
    }
}

impl From<&str> for ReasonValue {
    fn from(s: &str) -> Self {
        ReasonValue::Text(s.to_string())
    }
}

impl From<String> for ReasonValue {
    fn from(s: String) -> Self {
        ReasonValue::Text(s)
    }
}

impl From<Vec<String>> for ReasonValue {
    fn from(items: Vec<String>) -> Self {
        ReasonValue::List(items)
    }
}

/// Diagnostic keys explaining a non-RHEL determination.
pub type Reasons = BTreeMap<String, ReasonValue>;

/// Reason keys written by the resolver.
pub mod reason_keys {
    pub const REASON: &str = "reason";
    pub const KERNEL: &str = "kernel";
    pub const KERNEL_VENDOR: &str = "kernel_vendor";
    pub const FAULTY_PACKAGES: &str = "faulty_packages";
    pub const RELEASE: &str = "release";
    pub const BUILD_INFO: &str = "build_info";
}

/// Final OS identity determination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    /// Release family label, e.g. `RHEL`, `CentOS`, `Unknown`.
    #[schemars(with = "String")]
    pub release: Release,
    /// Human-readable product name.
    pub name: String,
    /// Product label; differs from `release` for RHEL variants such as `RHEL AI`.
    pub product: String,
    pub is_rhel: bool,
    pub is_rhel_compatible: bool,
    /// Empty when the system was cleanly identified as RHEL.
    pub reasons: Reasons,
}

impl Verdict {
    /// Look up a text reason.
    pub fn reason(&self, key: &str) -> Option<&str> {
        self.reasons.get(key).and_then(ReasonValue::as_text)
    }
}
