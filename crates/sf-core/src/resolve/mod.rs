//! OS identity resolution.
//!
//! A [`Resolver`] runs an ordered list of [`EvidenceEvaluator`]s over a
//! [`FactSet`]. Each evaluator looks at one evidence source and returns an
//! [`Assessment`]:
//!
//! - `Conclusive` ends the evaluation with its release.
//! - `Supporting` votes RHEL but lets later sources contradict it.
//! - `Contradicting` rules RHEL out unless an earlier source already
//!   supported it; later `Supporting` votes are ignored.
//! - `Inconclusive` records its reasons and falls through.
//!
//! Reasons from every evaluator that ran are merged, the first writer of a
//! key winning. A verdict of RHEL carries no reasons, and any other verdict
//! carries at least one.
//!
//! ```
//! use sf_core::facts::parse_uname;
//! use sf_core::resolve::{resolve, FactSet, Release};
//!
//! let kernel = parse_uname("Linux host 4.18.0-372.19.1.el8_6uek.x86_64 #1 SMP").unwrap();
//! let verdict = resolve(&FactSet::default().with_kernel(kernel));
//! assert_eq!(verdict.release, Release::Oracle);
//! assert_eq!(verdict.reason("kernel"), Some("4.18.0-372.19.1.el8_6uek.x86_64"));
//! ```

pub mod evaluators;
pub mod vendor;
pub mod verdict;

pub use evaluators::{BootLogEvaluator, KernelEvaluator, PackagesEvaluator, ReleaseFilesEvaluator};
pub use verdict::{reason_keys, ReasonValue, Reasons, Release, Verdict};

use crate::facts::{BootLogFact, KernelFact, OsReleaseFact, PackageInventory, RedhatReleaseFact};
use crate::logging::event_names;
use serde::{Deserialize, Serialize};
use sf_config::Policy;
use std::sync::OnceLock;
use tracing::{debug, info};

const NOTHING_TO_CHECK: &str = "Nothing available to check";
const RHEL_AI_VARIANT: &str = "rhel_ai";
const RHEL_AI_PRODUCT: &str = "RHEL AI";

/// Evidence available for one snapshot. Every fact is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactSet {
    pub kernel: Option<KernelFact>,
    pub boot_log: Option<BootLogFact>,
    pub packages: Option<PackageInventory>,
    pub os_release: Option<OsReleaseFact>,
    pub redhat_release: Option<RedhatReleaseFact>,
}

impl FactSet {
    pub fn with_kernel(mut self, kernel: KernelFact) -> Self {
        self.kernel = Some(kernel);
        self
    }

    pub fn with_boot_log(mut self, boot_log: BootLogFact) -> Self {
        self.boot_log = Some(boot_log);
        self
    }

    pub fn with_packages(mut self, packages: PackageInventory) -> Self {
        self.packages = Some(packages);
        self
    }

    pub fn with_os_release(mut self, os_release: OsReleaseFact) -> Self {
        self.os_release = Some(os_release);
        self
    }

    pub fn with_redhat_release(mut self, redhat_release: RedhatReleaseFact) -> Self {
        self.redhat_release = Some(redhat_release);
        self
    }

    /// True when no fact is present.
    pub fn is_empty(&self) -> bool {
        self.kernel.is_none()
            && self.boot_log.is_none()
            && self.packages.is_none()
            && self.os_release.is_none()
            && self.redhat_release.is_none()
    }
}

/// How much weight an assessment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// Decides the verdict; later sources are not consulted.
    Conclusive,
    /// Points at RHEL; later sources may still overrule it.
    Supporting,
    /// Evidence against RHEL without naming another release.
    Contradicting,
    /// No usable signal.
    Inconclusive,
}

/// Identifies an evaluator in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    ReleaseFiles,
    Kernel,
    Packages,
    BootLog,
}

impl std::fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EvidenceSource::ReleaseFiles => "release_files",
            EvidenceSource::Kernel => "kernel",
            EvidenceSource::Packages => "packages",
            EvidenceSource::BootLog => "boot_log",
        };
        write!(f, "{}", s)
    }
}

/// One evaluator's reading of its evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub release: Release,
    pub strength: Strength,
    pub reasons: Reasons,
}

impl Assessment {
    pub fn conclusive(release: Release) -> Self {
        Assessment {
            release,
            strength: Strength::Conclusive,
            reasons: Reasons::new(),
        }
    }

    /// RHEL, open to contradiction.
    pub fn supporting() -> Self {
        Assessment {
            release: Release::Rhel,
            strength: Strength::Supporting,
            reasons: Reasons::new(),
        }
    }

    /// Not RHEL, release unknown.
    pub fn contradicting() -> Self {
        Assessment {
            release: Release::Unknown,
            strength: Strength::Contradicting,
            reasons: Reasons::new(),
        }
    }

    pub fn inconclusive() -> Self {
        Assessment {
            release: Release::Unknown,
            strength: Strength::Inconclusive,
            reasons: Reasons::new(),
        }
    }

    pub fn with_reason(mut self, key: &str, value: impl Into<ReasonValue>) -> Self {
        self.reasons.insert(key.to_string(), value.into());
        self
    }

    /// Promote to a conclusive `release`, keeping the reasons.
    pub fn into_conclusive(self, release: Release) -> Self {
        Assessment {
            release,
            strength: Strength::Conclusive,
            reasons: self.reasons,
        }
    }
}

/// One evidence source's contribution to the verdict.
pub trait EvidenceEvaluator: Send + Sync {
    fn source(&self) -> EvidenceSource;

    /// `None` when the source has nothing to say (fact absent, or nothing
    /// relevant in it).
    fn evaluate(&self, facts: &FactSet, policy: &Policy) -> Option<Assessment>;
}

/// Ordered evaluators plus the policy they consult.
pub struct Resolver {
    policy: Policy,
    evaluators: Vec<Box<dyn EvidenceEvaluator>>,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new(Policy::default())
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sources: Vec<EvidenceSource> = self.evaluators.iter().map(|e| e.source()).collect();
        f.debug_struct("Resolver")
            .field("policy", &self.policy)
            .field("evaluators", &sources)
            .finish()
    }
}

impl Resolver {
    /// Resolver with the built-in evaluators: release files, kernel,
    /// packages, boot log.
    pub fn new(policy: Policy) -> Self {
        Resolver {
            policy,
            evaluators: vec![
                Box::new(ReleaseFilesEvaluator),
                Box::new(KernelEvaluator),
                Box::new(PackagesEvaluator),
                Box::new(BootLogEvaluator),
            ],
        }
    }

    /// Append an evaluator after the built-in ones.
    pub fn with_evaluator(mut self, evaluator: Box<dyn EvidenceEvaluator>) -> Self {
        self.evaluators.push(evaluator);
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Resolve the OS identity of one fact set. Never fails.
    pub fn resolve(&self, facts: &FactSet) -> Verdict {
        let mut reasons = Reasons::new();
        let mut assessed = false;
        let mut supported = false;
        let mut contradicted = false;
        let mut decided: Option<Release> = None;

        for evaluator in &self.evaluators {
            let source = evaluator.source();
            let Some(assessment) = evaluator.evaluate(facts, &self.policy) else {
                debug!(target: event_names::RESOLVE_EVALUATED, %source, "no evidence");
                continue;
            };
            debug!(
                target: event_names::RESOLVE_EVALUATED,
                %source,
                release = %assessment.release,
                strength = ?assessment.strength,
                "evidence assessed"
            );

            assessed = true;
            for (key, value) in assessment.reasons {
                reasons.entry(key).or_insert(value);
            }
            match assessment.strength {
                Strength::Conclusive => {
                    decided = Some(assessment.release);
                    break;
                }
                Strength::Supporting => supported |= !contradicted,
                Strength::Contradicting => contradicted |= !supported,
                Strength::Inconclusive => {}
            }
        }

        let release = if !assessed {
            reasons.insert(reason_keys::REASON.to_string(), NOTHING_TO_CHECK.into());
            Release::Unknown
        } else {
            decided.unwrap_or(if supported {
                Release::Rhel
            } else {
                Release::Unknown
            })
        };
        if release.is_rhel() {
            reasons.clear();
        } else if reasons.is_empty() {
            reasons.insert(
                reason_keys::REASON.to_string(),
                format!("NON-RHEL: {}", release).into(),
            );
        }

        let verdict = self.build_verdict(facts, release, reasons);
        info!(
            target: event_names::RESOLVE_VERDICT,
            release = %verdict.release,
            is_rhel = verdict.is_rhel,
            is_rhel_compatible = verdict.is_rhel_compatible,
            reasons = verdict.reasons.len(),
            "os identity resolved"
        );
        verdict
    }

    fn build_verdict(&self, facts: &FactSet, release: Release, reasons: Reasons) -> Verdict {
        let os_release = facts.os_release.as_ref();
        let label = release.label().to_string();

        let name = os_release
            .and_then(|f| f.name().or_else(|| f.pretty_name()))
            .map(str::to_string)
            .unwrap_or_else(|| label.clone());

        let rhel_ai = release.is_rhel()
            && os_release.and_then(OsReleaseFact::variant_id) == Some(RHEL_AI_VARIANT);
        let product = if rhel_ai {
            RHEL_AI_PRODUCT.to_string()
        } else {
            label.clone()
        };

        Verdict {
            is_rhel: release.is_rhel(),
            is_rhel_compatible: self.policy.is_rhel_compatible(&label),
            release,
            name,
            product,
            reasons,
        }
    }
}

/// Resolve with the default policy.
pub fn resolve(facts: &FactSet) -> Verdict {
    static DEFAULT: OnceLock<Resolver> = OnceLock::new();
    DEFAULT.get_or_init(Resolver::default).resolve(facts)
}
