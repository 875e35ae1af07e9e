//! Distribution signatures and vendor-string matching.

use super::verdict::Release;
use crate::facts::{OsReleaseFact, PackageRecord};
use sf_config::Policy;

/// How one non-RHEL distribution identifies itself across evidence sources.
#[derive(Debug)]
pub struct DistroSignature {
    pub release: Release,
    /// os-release `ID` values.
    pub os_release_ids: &'static [&'static str],
    /// Lower-case product text prefixes (redhat-release, os-release `NAME`).
    pub product_prefixes: &'static [&'static str],
    /// Packages whose presence names the distribution.
    pub release_packages: &'static [&'static str],
    /// Words in a kernel build banner.
    pub build_keywords: &'static [&'static str],
    /// Words in a package vendor string.
    pub vendor_keywords: &'static [&'static str],
}

/// Known distributions, in match order.
pub static SIGNATURES: &[DistroSignature] = &[
    DistroSignature {
        release: Release::CentOs,
        os_release_ids: &["centos"],
        product_prefixes: &["centos"],
        release_packages: &["centos-stream-release", "centos-linux-release", "centos-release"],
        build_keywords: &["centos"],
        vendor_keywords: &["centos"],
    },
    DistroSignature {
        release: Release::Fedora,
        os_release_ids: &["fedora"],
        product_prefixes: &["fedora"],
        release_packages: &["fedora-release"],
        build_keywords: &["fedora"],
        vendor_keywords: &["fedora"],
    },
    DistroSignature {
        release: Release::Oracle,
        os_release_ids: &["ol"],
        product_prefixes: &["oracle"],
        release_packages: &["oraclelinux-release", "enterprise-release"],
        build_keywords: &["oracle"],
        vendor_keywords: &["oracle"],
    },
    DistroSignature {
        release: Release::Suse,
        os_release_ids: &["sles", "sles_sap", "opensuse", "opensuse-leap", "suse"],
        product_prefixes: &["suse", "sles", "opensuse"],
        release_packages: &["sles-release", "sles_sap-release"],
        build_keywords: &["suse", "novell"],
        vendor_keywords: &["suse", "novell"],
    },
    DistroSignature {
        release: Release::Rocky,
        os_release_ids: &["rocky"],
        product_prefixes: &["rocky"],
        release_packages: &["rocky-release"],
        build_keywords: &["rocky"],
        vendor_keywords: &["rocky"],
    },
    DistroSignature {
        release: Release::AlmaLinux,
        os_release_ids: &["almalinux"],
        product_prefixes: &["almalinux"],
        release_packages: &["almalinux-release"],
        build_keywords: &["almalinux"],
        vendor_keywords: &["almalinux"],
    },
    DistroSignature {
        release: Release::Miracle,
        os_release_ids: &["miraclelinux"],
        product_prefixes: &["miracle linux"],
        release_packages: &["miraclelinux-release"],
        build_keywords: &["miraclelinux"],
        vendor_keywords: &["miracle"],
    },
];

/// Lower-case, punctuation to spaces, whitespace collapsed.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `alias` occurs in `text` as whole words.
pub fn contains_words(text: &str, alias: &str) -> bool {
    let alias = normalize(alias);
    if alias.is_empty() {
        return false;
    }
    format!(" {} ", normalize(text)).contains(&format!(" {} ", alias))
}

/// Vendor string matches the Red Hat allow-list.
///
/// `Red Hat, Inc.`, `RH, Inc.` and `Red, Inc.` pass with the default
/// aliases; `RHat, Inc.` and `Hat, Inc.` do not.
pub fn is_rh_vendor(vendor: &str, policy: &Policy) -> bool {
    policy
        .vendor_aliases
        .iter()
        .any(|alias| contains_words(vendor, alias))
}

/// Red Hat vendor and, when signed, a Red Hat key.
pub fn is_genuine(record: &PackageRecord, policy: &Policy) -> bool {
    is_rh_vendor(&record.vendor, policy)
        && record
            .signing_key
            .as_deref()
            .map_or(true, |key| policy.is_redhat_key(key))
}

/// Map a package vendor string to the distribution it names.
pub fn vendor_to_release(vendor: &str, policy: &Policy) -> Release {
    if is_rh_vendor(vendor, policy) {
        return Release::Rhel;
    }
    SIGNATURES
        .iter()
        .find(|sig| sig.vendor_keywords.iter().any(|kw| contains_words(vendor, kw)))
        .map(|sig| sig.release.clone())
        .unwrap_or(Release::Unknown)
}

/// Find the distribution named by a word in a kernel build banner.
pub fn release_from_build_text(text: &str) -> Option<Release> {
    SIGNATURES
        .iter()
        .find(|sig| sig.build_keywords.iter().any(|kw| contains_words(text, kw)))
        .map(|sig| sig.release.clone())
}

fn first_word(text: &str) -> Release {
    text.split_whitespace()
        .next()
        .map(Release::from_label)
        .unwrap_or(Release::Unknown)
}

/// Map product text such as `Fedora` or `CentOS Linux` to a release.
///
/// Unrecognised text yields its first word.
pub fn release_from_product(text: &str) -> Release {
    let lower = text.trim().to_lowercase();
    if lower.starts_with("red hat enterprise linux") || lower.contains("red hat") {
        return Release::Rhel;
    }
    SIGNATURES
        .iter()
        .find(|sig| sig.product_prefixes.iter().any(|p| lower.starts_with(p)))
        .map(|sig| sig.release.clone())
        .unwrap_or_else(|| first_word(text))
}

/// Map os-release `ID` (or, lacking one, `NAME`) to a release.
pub fn release_from_os_release(fact: &OsReleaseFact) -> Release {
    let Some(id) = fact.id().map(str::trim).filter(|id| !id.is_empty()) else {
        return fact
            .name()
            .or_else(|| fact.pretty_name())
            .map(release_from_product)
            .unwrap_or(Release::Unknown);
    };

    let id = id.to_ascii_lowercase();
    if id == "rhel" {
        return Release::Rhel;
    }
    if let Some(sig) = SIGNATURES
        .iter()
        .find(|sig| sig.os_release_ids.contains(&id.as_str()))
    {
        return sig.release.clone();
    }
    let word = fact
        .pretty_name()
        .or_else(|| fact.name())
        .and_then(|text| text.split_whitespace().next());
    match word.map(|word| (word, Release::from_label(word))) {
        // Only `ID=rhel` names RHEL itself.
        Some((word, Release::Rhel)) => Release::Other(word.to_string()),
        Some((_, release)) => release,
        None => Release::Unknown,
    }
}
