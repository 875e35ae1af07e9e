//! Resolver policy types.
//!
//! The policy holds the tables the OS identity resolver consults when it
//! judges package provenance. Every field has a built-in default, so a
//! partial policy file only overrides what it names.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete resolver policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Policy {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Base-system packages expected to originate from Red Hat.
    #[serde(default = "default_marker_packages")]
    pub marker_packages: Vec<String>,

    /// Red Hat GPG key ids (lower-case hex, 16 chars).
    #[serde(default = "default_redhat_signing_keys")]
    pub redhat_signing_keys: Vec<String>,

    /// Normalised vendor strings accepted as Red Hat.
    ///
    /// A vendor matches when its normalised form contains one of these.
    #[serde(default = "default_vendor_aliases")]
    pub vendor_aliases: Vec<String>,

    /// Fraction of faulty marker packages above which the inventory is
    /// judged non-RHEL.
    #[serde(default = "default_faulty_threshold")]
    pub faulty_threshold: f64,

    /// Release labels treated as RHEL-compatible rebuilds.
    #[serde(default = "default_rhel_compatible")]
    pub rhel_compatible: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            schema_version: default_schema_version(),
            description: None,
            marker_packages: default_marker_packages(),
            redhat_signing_keys: default_redhat_signing_keys(),
            vendor_aliases: default_vendor_aliases(),
            faulty_threshold: default_faulty_threshold(),
            rhel_compatible: default_rhel_compatible(),
        }
    }
}

impl Policy {
    /// Whether `key_id` is a known Red Hat signing key.
    pub fn is_redhat_key(&self, key_id: &str) -> bool {
        self.redhat_signing_keys
            .iter()
            .any(|k| k.eq_ignore_ascii_case(key_id))
    }

    /// Whether a release label is flagged as RHEL-compatible.
    pub fn is_rhel_compatible(&self, label: &str) -> bool {
        self.rhel_compatible.iter().any(|r| r == label)
    }
}

fn default_schema_version() -> String {
    crate::CONFIG_SCHEMA_VERSION.to_string()
}

fn default_marker_packages() -> Vec<String> {
    [
        "audit-libs",
        "basesystem",
        "bash",
        "coreutils",
        "dbus",
        "dmidecode",
        "dnf",
        "dracut",
        "filesystem",
        "firewalld",
        "glibc",
        "gmp",
        "libacl",
        "libgcc",
        "libselinux",
        "passwd",
        "policycoreutils",
        "systemd",
        "yum",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_redhat_signing_keys() -> Vec<String> {
    [
        // release key 2
        "199e2f91fd431d51",
        // auxiliary key 2
        "5326810137017186",
        "938a80caf21541eb",
        "fd372689897da07a",
        "45689c882fa658e0",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_vendor_aliases() -> Vec<String> {
    ["red hat", "redhat", "rh inc", "red inc"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_faulty_threshold() -> f64 {
    0.5
}

fn default_rhel_compatible() -> Vec<String> {
    vec!["CentOS".to_string()]
}
