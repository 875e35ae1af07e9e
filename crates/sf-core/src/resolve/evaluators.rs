//! Built-in evidence evaluators, one per evidence source.

use super::verdict::{reason_keys, Release};
use super::vendor::{
    is_genuine, is_rh_vendor, release_from_build_text, release_from_os_release,
    release_from_product, vendor_to_release, SIGNATURES,
};
use super::{Assessment, EvidenceEvaluator, EvidenceSource, FactSet};
use crate::facts::{KernelFact, PackageInventory, PackageRecord};
use regex::Regex;
use sf_config::Policy;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// os-release first, then redhat-release.
///
/// A non-RHEL answer from either file is final.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReleaseFilesEvaluator;

impl EvidenceEvaluator for ReleaseFilesEvaluator {
    fn source(&self) -> EvidenceSource {
        EvidenceSource::ReleaseFiles
    }

    fn evaluate(&self, facts: &FactSet, _policy: &Policy) -> Option<Assessment> {
        if let Some(os_release) = &facts.os_release {
            let release = release_from_os_release(os_release);
            if !release.is_rhel() {
                return Some(
                    Assessment::conclusive(release)
                        .with_reason(reason_keys::REASON, "NON-RHEL: os-release"),
                );
            }
        }

        if let Some(redhat_release) = &facts.redhat_release {
            let release = release_from_product(&redhat_release.distro_word);
            if !release.is_rhel() {
                return Some(
                    Assessment::conclusive(release)
                        .with_reason(reason_keys::REASON, "NON-RHEL: redhat-release"),
                );
            }
        }

        if facts.os_release.is_some() || facts.redhat_release.is_some() {
            return Some(Assessment::conclusive(Release::Rhel));
        }
        None
    }
}

fn fedora_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.fc\d+").expect("static regex"))
}

fn rhel_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.el\d+(?:_\d+)*$").expect("static regex"))
}

/// Dist tag of the running kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct KernelEvaluator;

impl KernelEvaluator {
    fn distro_kernel(kernel: &KernelFact) -> Option<Release> {
        let uek = kernel.vendor_hint.as_deref() == Some("uek") || kernel.release.contains("uek");
        if uek {
            return Some(Release::Oracle);
        }
        if fedora_tag_re().is_match(&kernel.release) {
            return Some(Release::Fedora);
        }
        None
    }
}

impl EvidenceEvaluator for KernelEvaluator {
    fn source(&self) -> EvidenceSource {
        EvidenceSource::Kernel
    }

    fn evaluate(&self, facts: &FactSet, _policy: &Policy) -> Option<Assessment> {
        let kernel = facts.kernel.as_ref()?;

        if let Some(release) = Self::distro_kernel(kernel) {
            return Some(
                Assessment::conclusive(release)
                    .with_reason(reason_keys::KERNEL, kernel.kernel.as_str()),
            );
        }
        if rhel_tag_re().is_match(&kernel.release) {
            return Some(Assessment::supporting());
        }
        Some(Assessment::inconclusive().with_reason(reason_keys::KERNEL, kernel.kernel.as_str()))
    }
}

/// Package provenance: distro release packages, marker vendors and the
/// running kernel's package record.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackagesEvaluator;

impl PackagesEvaluator {
    fn release_package(packages: &PackageInventory) -> Option<(Release, &PackageRecord)> {
        SIGNATURES.iter().find_map(|sig| {
            sig.release_packages
                .iter()
                .find_map(|name| packages.newest(name))
                .map(|record| (sig.release.clone(), record))
        })
    }

    fn running_kernel<'a>(
        packages: &'a PackageInventory,
        kernel: &KernelFact,
    ) -> Option<&'a PackageRecord> {
        packages.get("kernel").iter().find(|record| {
            record.version == kernel.version
                && record.release == kernel.release
                && kernel.arch.as_deref().map_or(true, |arch| record.arch == arch)
        })
    }
}

impl EvidenceEvaluator for PackagesEvaluator {
    fn source(&self) -> EvidenceSource {
        EvidenceSource::Packages
    }

    fn evaluate(&self, facts: &FactSet, policy: &Policy) -> Option<Assessment> {
        let packages = facts.packages.as_ref()?;

        if let Some((release, record)) = Self::release_package(packages) {
            return Some(
                Assessment::conclusive(release).with_reason(reason_keys::RELEASE, record.nvr()),
            );
        }

        let running_kernel = facts
            .kernel
            .as_ref()
            .and_then(|kernel| Self::running_kernel(packages, kernel));

        let checked: Vec<&PackageRecord> = policy
            .marker_packages
            .iter()
            .flat_map(|name| packages.get(name))
            .chain(running_kernel)
            .collect();
        if checked.is_empty() {
            return None;
        }

        if running_kernel.is_some_and(|record| is_genuine(record, policy)) {
            return Some(Assessment::conclusive(Release::Rhel));
        }

        let faulty: Vec<&PackageRecord> = checked
            .iter()
            .copied()
            .filter(|record| !is_genuine(record, policy))
            .collect();
        let ratio = faulty.len() as f64 / checked.len() as f64;
        if ratio <= policy.faulty_threshold {
            return Some(Assessment::supporting());
        }

        // Multilib packages share an nvr.
        let nvrs: BTreeSet<String> = faulty.iter().map(|record| record.nvr()).collect();
        let assessment = Assessment::contradicting().with_reason(
            reason_keys::FAULTY_PACKAGES,
            nvrs.into_iter().collect::<Vec<_>>(),
        );

        // A running kernel that is present but not genuine settles it, even
        // when its vendor names no distribution.
        let Some(record) = running_kernel else {
            return Some(assessment);
        };
        if is_rh_vendor(&record.vendor, policy) {
            return Some(assessment.into_conclusive(Release::Unknown));
        }
        let release = match vendor_to_release(&record.vendor, policy) {
            Release::Rhel => Release::Unknown,
            release => release,
        };
        Some(
            assessment
                .with_reason(reason_keys::KERNEL_VENDOR, record.vendor.as_str())
                .into_conclusive(release),
        )
    }
}

/// Builder attribution in the kernel boot banner.
#[derive(Debug, Default, Clone, Copy)]
pub struct BootLogEvaluator;

impl EvidenceEvaluator for BootLogEvaluator {
    fn source(&self) -> EvidenceSource {
        EvidenceSource::BootLog
    }

    fn evaluate(&self, facts: &FactSet, _policy: &Policy) -> Option<Assessment> {
        let boot_log = facts.boot_log.as_ref()?;
        let line = boot_log.raw_build_line.as_str();

        if let Some(release) = release_from_build_text(boot_log.attribution()) {
            return Some(
                Assessment::conclusive(release).with_reason(reason_keys::BUILD_INFO, line),
            );
        }
        let redhat_host = boot_log
            .build_host()
            .is_some_and(|host| host.to_ascii_lowercase().ends_with("redhat.com"));
        if redhat_host {
            return Some(Assessment::supporting());
        }
        Some(Assessment::inconclusive().with_reason(reason_keys::BUILD_INFO, line))
    }
}
