//! Installed package inventory parsing.
//!
//! The inventory is one JSON object per line, as written by
//! `rpm -qa --qf` into `installed-rpms.json`. Lines that are not JSON
//! objects (banners, plain `rpm -qa` output, blank lines) are ignored.

use super::version::compare_evr;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sf_common::{Error, FactKind, Result};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// One installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub epoch: Option<u64>,
    pub version: String,
    pub release: String,
    pub arch: String,
    pub vendor: String,
    /// GPG key id the package was signed with (lower-case).
    pub signing_key: Option<String>,
}

impl PackageRecord {
    /// `name-version-release`.
    pub fn nvr(&self) -> String {
        format!("{}-{}-{}", self.name, self.version, self.release)
    }

    /// Epoch/version/release ordering against another record.
    pub fn cmp_evr(&self, other: &PackageRecord) -> std::cmp::Ordering {
        compare_evr(
            (self.epoch, &self.version, &self.release),
            (other.epoch, &other.version, &other.release),
        )
    }
}

/// Package records grouped by name, newest first within each name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInventory {
    packages: BTreeMap<String, Vec<PackageRecord>>,
}

impl PackageInventory {
    /// Build an inventory from loose records.
    pub fn from_records(records: impl IntoIterator<Item = PackageRecord>) -> Self {
        let mut packages: BTreeMap<String, Vec<PackageRecord>> = BTreeMap::new();
        for record in records {
            packages.entry(record.name.clone()).or_default().push(record);
        }
        for list in packages.values_mut() {
            // Stable sort keeps input order among equal EVRs (multilib).
            list.sort_by(|a, b| b.cmp_evr(a));
        }
        PackageInventory { packages }
    }

    /// All records for `name`, newest first.
    pub fn get(&self, name: &str) -> &[PackageRecord] {
        self.packages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The newest installed record for `name`.
    pub fn newest(&self, name: &str) -> Option<&PackageRecord> {
        self.get(name).first()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Number of distinct package names.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate over `(name, records)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PackageRecord])> {
        self.packages
            .iter()
            .map(|(name, list)| (name.as_str(), list.as_slice()))
    }
}

/// Raw JSON shape of one inventory line; unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    epoch: Option<serde_json::Value>,
    version: String,
    release: String,
    #[serde(default)]
    arch: String,
    #[serde(default)]
    vendor: String,
    #[serde(default)]
    sigpgp: Option<String>,
}

fn key_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Key ID\s+([0-9A-Za-z]+)").expect("static regex"))
}

/// `"(none)"`, `""`, `"1"` or `1`.
fn parse_epoch(value: Option<&serde_json::Value>) -> Option<u64> {
    match value? {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn signing_key(sigpgp: Option<&str>) -> Option<String> {
    key_id_re()
        .captures(sigpgp?)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
}

impl From<RawRecord> for PackageRecord {
    fn from(raw: RawRecord) -> Self {
        PackageRecord {
            epoch: parse_epoch(raw.epoch.as_ref()),
            signing_key: signing_key(raw.sigpgp.as_deref()),
            name: raw.name,
            version: raw.version,
            release: raw.release,
            arch: raw.arch,
            vendor: raw.vendor,
        }
    }
}

/// Parse a JSON-lines package inventory.
pub fn parse_installed_rpms(content: &str) -> Result<PackageInventory> {
    let records = content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('{'))
        .filter_map(|line| serde_json::from_str::<RawRecord>(line).ok())
        .map(PackageRecord::from);

    let inventory = PackageInventory::from_records(records);
    if inventory.is_empty() {
        return Err(Error::skip(FactKind::Packages, "no package records found"));
    }
    Ok(inventory)
}
