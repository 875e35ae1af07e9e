//! Extracted snapshot directories (sosreport or insights archive layout).

use super::ArtifactSource;
use sf_common::{Error, FactKind, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Relative paths tried for each kind, first existing file wins.
pub fn candidate_paths(kind: FactKind) -> &'static [&'static str] {
    match kind {
        FactKind::Kernel => &["sos_commands/kernel/uname_-a", "insights_commands/uname_-a"],
        FactKind::BootLog => &[
            "sos_commands/kernel/dmesg",
            "sos_commands/general/dmesg",
            "var/log/dmesg",
        ],
        FactKind::Packages => &[
            "installed-rpms.json",
            "insights_commands/rpm_-qa_--qf_JSON",
            "sos_commands/rpm/package-data",
            "installed-rpms",
        ],
        FactKind::OsRelease => &["etc/os-release", "usr/lib/os-release"],
        FactKind::RedhatRelease => &["etc/redhat-release"],
        FactKind::DnfModules => &[
            "sos_commands/dnf/dnf_module_list",
            "insights_commands/dnf_-C_--noplugins_module_list",
        ],
    }
}

/// A snapshot unpacked on disk.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    root: PathBuf,
}

impl DirectorySnapshot {
    /// Open a snapshot rooted at `root`, which must be a directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::SnapshotNotFound(root.display().to_string()));
        }
        Ok(DirectorySnapshot {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the artifact that would be read for `kind`.
    pub fn locate(&self, kind: FactKind) -> Option<PathBuf> {
        candidate_paths(kind)
            .iter()
            .map(|rel| self.root.join(rel))
            .find(|path| path.is_file())
    }
}

impl ArtifactSource for DirectorySnapshot {
    fn read(&self, kind: FactKind) -> Option<String> {
        let path = self.locate(kind)?;
        // Binary noise in logs must not hide the rest of the file.
        let bytes = fs::read(&path).ok()?;
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
