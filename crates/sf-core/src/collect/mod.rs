//! Artifact collection.
//!
//! The archive walker that finds files inside a snapshot lives outside this
//! crate; it is reached through [`ArtifactSource`], which hands back the raw
//! text of one artifact kind or `None`. This module turns those artifacts
//! into a [`FactSet`]:
//!
//! - a missing artifact leaves its fact absent
//! - a parser skip or parse failure also leaves it absent, logged at debug
//!
//! so collection itself never fails. The `_traced` variants also return the
//! fate of each artifact as [`LogEvent`]s, for callers keeping an audit trail.

mod snapshot;

pub use snapshot::{candidate_paths, DirectorySnapshot};

use crate::facts::{
    parse_dmesg, parse_dnf_module_list, parse_installed_rpms, parse_os_release,
    parse_redhat_release, parse_uname, DnfModuleList,
};
use crate::logging::{event_names, LogContext, LogEvent};
use crate::resolve::{FactSet, Resolver, Verdict};
use sf_common::{FactKind, Result};
use std::collections::HashMap;
use tracing::debug;

/// Supplier of raw artifact text.
pub trait ArtifactSource {
    /// Raw text of the artifact for `kind`, if the snapshot has one.
    fn read(&self, kind: FactKind) -> Option<String>;

    /// Short label for logs.
    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

impl ArtifactSource for HashMap<FactKind, String> {
    fn read(&self, kind: FactKind) -> Option<String> {
        self.get(&kind).cloned()
    }
}

/// What became of one artifact during collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOutcome {
    /// Read and turned into a fact.
    Parsed { bytes: usize },
    /// The source has no such artifact.
    Missing,
    /// Present but in no recognised grammar.
    Skipped { reason: String },
    /// Present but malformed.
    Failed { code: u32, error: String },
}

/// Read and parse one artifact. Anything but success leaves the fact absent.
fn collect_fact<S, T, F>(source: &S, kind: FactKind, parse: F) -> (Option<T>, ArtifactOutcome)
where
    S: ArtifactSource + ?Sized,
    F: FnOnce(&str) -> Result<T>,
{
    let Some(content) = source.read(kind) else {
        debug!(target: event_names::COLLECT_ARTIFACT_MISSING, %kind, "artifact missing");
        return (None, ArtifactOutcome::Missing);
    };
    debug!(
        target: event_names::COLLECT_ARTIFACT_FOUND,
        %kind,
        bytes = content.len(),
        "artifact found"
    );

    match parse(&content) {
        Ok(fact) => (
            Some(fact),
            ArtifactOutcome::Parsed {
                bytes: content.len(),
            },
        ),
        Err(err) if err.is_skip() => {
            debug!(target: event_names::PARSE_SKIPPED, %kind, error = %err, "parser skipped");
            (
                None,
                ArtifactOutcome::Skipped {
                    reason: err.to_string(),
                },
            )
        }
        Err(err) => {
            debug!(
                target: event_names::PARSE_FAILED,
                %kind,
                code = err.code(),
                error = %err,
                "parser failed"
            );
            (
                None,
                ArtifactOutcome::Failed {
                    code: err.code(),
                    error: err.to_string(),
                },
            )
        }
    }
}

fn record_outcome<T, G>(
    record: &mut G,
    kind: FactKind,
    collected: (Option<T>, ArtifactOutcome),
) -> Option<T>
where
    G: FnMut(FactKind, ArtifactOutcome),
{
    let (fact, outcome) = collected;
    record(kind, outcome);
    fact
}

fn gather<S, G>(source: &S, mut record: G) -> FactSet
where
    S: ArtifactSource + ?Sized,
    G: FnMut(FactKind, ArtifactOutcome),
{
    debug!(snapshot = %source.describe(), "gathering facts");
    FactSet {
        kernel: record_outcome(
            &mut record,
            FactKind::Kernel,
            collect_fact(source, FactKind::Kernel, parse_uname),
        ),
        boot_log: record_outcome(
            &mut record,
            FactKind::BootLog,
            collect_fact(source, FactKind::BootLog, parse_dmesg),
        ),
        packages: record_outcome(
            &mut record,
            FactKind::Packages,
            collect_fact(source, FactKind::Packages, parse_installed_rpms),
        ),
        os_release: record_outcome(
            &mut record,
            FactKind::OsRelease,
            collect_fact(source, FactKind::OsRelease, parse_os_release),
        ),
        redhat_release: record_outcome(
            &mut record,
            FactKind::RedhatRelease,
            collect_fact(source, FactKind::RedhatRelease, parse_redhat_release),
        ),
    }
}

/// Parse every evidence artifact the source provides.
pub fn gather_facts<S: ArtifactSource + ?Sized>(source: &S) -> FactSet {
    gather(source, |_, _| {})
}

/// [`gather_facts`], also returning one audit event per evidence artifact.
pub fn gather_facts_traced<S: ArtifactSource + ?Sized>(
    source: &S,
    ctx: &LogContext,
) -> (FactSet, Vec<LogEvent>) {
    let mut events = Vec::new();
    let facts = gather(source, |kind, outcome| events.push(ctx.artifact(kind, &outcome)));
    (facts, events)
}

/// Gather facts from `source` and resolve its OS identity.
pub fn resolve_snapshot<S: ArtifactSource + ?Sized>(source: &S, resolver: &Resolver) -> Verdict {
    resolver.resolve(&gather_facts(source))
}

/// [`resolve_snapshot`] with the artifact trail and a closing verdict event.
pub fn resolve_snapshot_traced<S: ArtifactSource + ?Sized>(
    source: &S,
    resolver: &Resolver,
    ctx: &LogContext,
) -> (Verdict, Vec<LogEvent>) {
    let (facts, mut events) = gather_facts_traced(source, ctx);
    let verdict = resolver.resolve(&facts);
    events.push(ctx.verdict(&verdict));
    (verdict, events)
}

/// The `dnf module list` table, when present and parseable.
pub fn dnf_module_list<S: ArtifactSource + ?Sized>(source: &S) -> Option<DnfModuleList> {
    collect_fact(source, FactKind::DnfModules, parse_dnf_module_list).0
}
