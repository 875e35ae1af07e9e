//! Kinds of evidence facts harvested from a snapshot.

use serde::{Deserialize, Serialize};

/// One kind of diagnostic artifact that a parser turns into a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    /// Kernel self-report (`uname -a`).
    Kernel,
    /// Boot / kernel ring buffer log (`dmesg`).
    BootLog,
    /// Installed package inventory (one JSON record per line).
    Packages,
    /// Structured release metadata (`/etc/os-release`).
    OsRelease,
    /// Legacy one-line release file (`/etc/redhat-release`).
    RedhatRelease,
    /// `dnf module list` output.
    DnfModules,
}

impl FactKind {
    /// All kinds, in collection order.
    pub const ALL: [FactKind; 6] = [
        FactKind::Kernel,
        FactKind::BootLog,
        FactKind::Packages,
        FactKind::OsRelease,
        FactKind::RedhatRelease,
        FactKind::DnfModules,
    ];
}

impl std::fmt::Display for FactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactKind::Kernel => write!(f, "uname"),
            FactKind::BootLog => write!(f, "dmesg"),
            FactKind::Packages => write!(f, "installed_rpms"),
            FactKind::OsRelease => write!(f, "os-release"),
            FactKind::RedhatRelease => write!(f, "redhat-release"),
            FactKind::DnfModules => write!(f, "dnf_module_list"),
        }
    }
}
