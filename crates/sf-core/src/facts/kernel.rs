//! Kernel self-report (`uname -a` / `uname -r`) parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use sf_common::{Error, FactKind, Result};
use std::sync::OnceLock;

/// Architectures recognised as a trailing `.arch` suffix on a kernel token.
const KNOWN_ARCHES: &[&str] = &[
    "x86_64", "i386", "i586", "i686", "aarch64", "ppc64le", "ppc64", "ppc", "s390x", "s390",
    "noarch", "armv7hl",
];

/// The running kernel as reported by `uname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelFact {
    /// Full kernel token, e.g. `4.18.0-372.19.1.el8_6uek.x86_64`.
    pub kernel: String,
    /// Upstream version, e.g. `4.18.0`.
    pub version: String,
    /// Package release without arch, e.g. `372.19.1.el8_6uek`.
    pub release: String,
    pub arch: Option<String>,
    /// Alphabetic tag glued to the dist tag (`uek` in `.el8_6uek`).
    pub vendor_hint: Option<String>,
}

impl KernelFact {
    /// `version-release` without the architecture suffix.
    pub fn version_release(&self) -> String {
        format!("{}-{}", self.version, self.release)
    }

    /// Build a fact from a bare kernel token (`uname -r`).
    pub fn from_token(token: &str) -> Option<KernelFact> {
        let token = token.trim();
        if !token.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let (version, rest) = token.split_once('-')?;
        if version.is_empty() || rest.is_empty() {
            return None;
        }

        let (release, arch) = match rest.rsplit_once('.') {
            Some((rel, arch)) if KNOWN_ARCHES.contains(&arch) => (rel, Some(arch.to_string())),
            _ => (rest, None),
        };

        Some(KernelFact {
            kernel: token.to_string(),
            version: version.to_string(),
            release: release.to_string(),
            arch,
            vendor_hint: vendor_hint(release),
        })
    }
}

fn dist_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.el\d+(?:_\d+)*([a-z]+)").expect("static regex"))
}

fn vendor_hint(release: &str) -> Option<String> {
    dist_tag_re()
        .captures(release)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse `uname -a` (or `uname -r`) output.
///
/// The first line carrying a plausible kernel token wins. For `uname -a`
/// that is the third field after `Linux <hostname>`.
pub fn parse_uname(content: &str) -> Result<KernelFact> {
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let candidate = match fields.as_slice() {
            ["Linux", _host, kernel, ..] => Some(*kernel),
            [single] => Some(*single),
            _ => None,
        };
        if let Some(fact) = candidate.and_then(KernelFact::from_token) {
            return Ok(fact);
        }
    }
    Err(Error::skip(FactKind::Kernel, "no kernel version line located"))
}
