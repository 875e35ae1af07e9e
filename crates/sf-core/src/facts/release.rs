//! Release metadata: `/etc/os-release` and `/etc/redhat-release`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use sf_common::{Error, FactKind, Result};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Key/value pairs of an os-release file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsReleaseFact {
    pub fields: BTreeMap<String, String>,
}

impl OsReleaseFact {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("ID")
    }

    pub fn name(&self) -> Option<&str> {
        self.get("NAME")
    }

    pub fn pretty_name(&self) -> Option<&str> {
        self.get("PRETTY_NAME")
    }

    pub fn variant_id(&self) -> Option<&str> {
        self.get("VARIANT_ID")
    }

    pub fn version_id(&self) -> Option<&str> {
        self.get("VERSION_ID")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OsReleaseFact {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        OsReleaseFact {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse os-release `KEY=value` lines.
pub fn parse_os_release(content: &str) -> Result<OsReleaseFact> {
    let fact: OsReleaseFact = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), unquote(value.trim())))
        .filter(|(key, _)| !key.is_empty())
        .collect();

    if fact.fields.is_empty() {
        return Err(Error::skip(FactKind::OsRelease, "no key=value pairs found"));
    }
    Ok(fact)
}

/// The one-line legacy release file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedhatReleaseFact {
    /// Product text before ` release `, e.g. `Red Hat Enterprise Linux`.
    pub distro_word: String,
    pub version: Option<String>,
    pub code_name: Option<String>,
    pub full_text: String,
}

impl RedhatReleaseFact {
    /// `major` component of the version, if numeric.
    pub fn major(&self) -> Option<u32> {
        self.version
            .as_deref()?
            .split('.')
            .next()?
            .parse()
            .ok()
    }
}

fn redhat_release_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+?)\s+release\s+(\S+)(?:\s+\(([^)]+)\))?").expect("static regex")
    })
}

/// Parse `<product> release <version> (<code name>)`.
///
/// A line without `release` is kept whole as the product text.
pub fn parse_redhat_release(content: &str) -> Result<RedhatReleaseFact> {
    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| Error::skip(FactKind::RedhatRelease, "empty release file"))?;

    let fact = match redhat_release_re().captures(line) {
        Some(caps) => RedhatReleaseFact {
            distro_word: caps[1].trim().to_string(),
            version: caps.get(2).map(|m| m.as_str().to_string()),
            code_name: caps.get(3).map(|m| m.as_str().to_string()),
            full_text: line.to_string(),
        },
        None => RedhatReleaseFact {
            distro_word: line.to_string(),
            version: None,
            code_name: None,
            full_text: line.to_string(),
        },
    };
    Ok(fact)
}
