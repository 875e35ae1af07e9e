//! Boot log (`dmesg`) parsing.

use serde::{Deserialize, Serialize};
use sf_common::{Error, FactKind, Result};

const MARKER: &str = "Linux version";

/// The kernel build banner found in a boot log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootLogFact {
    /// The whole banner line, trimmed; a leading timestamp is kept.
    pub raw_build_line: String,
}

impl BootLogFact {
    /// Text following `Linux version`.
    fn after_marker(&self) -> &str {
        self.raw_build_line
            .find(MARKER)
            .map(|idx| &self.raw_build_line[idx + MARKER.len()..])
            .unwrap_or("")
            .trim_start()
    }

    /// The kernel version token right after `Linux version`.
    pub fn kernel_version(&self) -> Option<&str> {
        self.after_marker().split_whitespace().next()
    }

    /// Builder and compiler attribution: everything after the version token.
    pub fn attribution(&self) -> &str {
        let rest = self.after_marker();
        match rest.find(char::is_whitespace) {
            Some(idx) => rest[idx..].trim(),
            None => "",
        }
    }

    /// Host part of the `(user@host)` builder group, when present.
    pub fn build_host(&self) -> Option<&str> {
        let attribution = self.attribution();
        let group = attribution.strip_prefix('(')?;
        let end = group.find(')')?;
        let (_, host) = group[..end].split_once('@')?;
        Some(host.trim()).filter(|h| !h.is_empty())
    }
}

/// Extract the first `Linux version` banner from boot log text.
pub fn parse_dmesg(content: &str) -> Result<BootLogFact> {
    content
        .lines()
        .find(|line| line.contains(MARKER))
        .map(|line| BootLogFact {
            raw_build_line: line.trim().to_string(),
        })
        .ok_or_else(|| Error::skip(FactKind::BootLog, "no kernel version line located"))
}
