//! Structured events for a resolution run.
//!
//! `tracing` carries the live log stream. [`LogEvent`] is the
//! serialisable record of the same run, kept by callers that want an audit
//! trail of which artifacts fed a verdict (see
//! [`gather_facts_traced`](crate::collect::gather_facts_traced)).

use crate::collect::ArtifactOutcome;
use crate::resolve::Verdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sf_common::FactKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
}

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Locating artifacts in a snapshot.
    Collect,
    /// Turning artifact text into facts.
    Parse,
    /// Running one evidence evaluator.
    Evaluate,
    /// Folding assessments into the verdict.
    Resolve,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::Collect => "collect",
            Stage::Parse => "parse",
            Stage::Evaluate => "evaluate",
            Stage::Resolve => "resolve",
        })
    }
}

/// Event names, also used as `tracing` targets.
pub mod event_names {
    pub const COLLECT_ARTIFACT_FOUND: &str = "collect.artifact_found";
    pub const COLLECT_ARTIFACT_MISSING: &str = "collect.artifact_missing";

    pub const PARSE_SKIPPED: &str = "parse.skipped";
    pub const PARSE_FAILED: &str = "parse.failed";

    pub const RESOLVE_EVALUATED: &str = "resolve.evaluated";
    pub const RESOLVE_VERDICT: &str = "resolve.verdict";
}

/// One line of a run's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub ts: DateTime<Utc>,
    pub level: Level,
    /// One of [`event_names`].
    pub event: String,
    pub run_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    pub stage: Stage,
    /// Artifact the event concerns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FactKind>,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEvent {
    pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.fields.insert(key.into(), v);
        }
        self
    }

    /// Single JSON line, no trailing newline.
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"error":"serialization_failed","event":"{}"}}"#,
                self.event
            )
        })
    }
}

/// Run and snapshot identity stamped onto every event.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub run_id: String,
    pub snapshot_id: Option<String>,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>) -> Self {
        LogContext {
            run_id: run_id.into(),
            snapshot_id: None,
        }
    }

    pub fn with_snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    fn event(
        &self,
        level: Level,
        event: &str,
        stage: Stage,
        kind: Option<FactKind>,
        message: impl Into<String>,
    ) -> LogEvent {
        LogEvent {
            ts: Utc::now(),
            level,
            event: event.to_string(),
            run_id: self.run_id.clone(),
            snapshot_id: self.snapshot_id.clone(),
            stage,
            kind,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Record what happened to one artifact during collection.
    pub fn artifact(&self, kind: FactKind, outcome: &ArtifactOutcome) -> LogEvent {
        match outcome {
            ArtifactOutcome::Parsed { bytes } => self
                .event(
                    Level::Debug,
                    event_names::COLLECT_ARTIFACT_FOUND,
                    Stage::Collect,
                    Some(kind),
                    "artifact parsed",
                )
                .with_field("bytes", bytes),
            ArtifactOutcome::Missing => self.event(
                Level::Debug,
                event_names::COLLECT_ARTIFACT_MISSING,
                Stage::Collect,
                Some(kind),
                "artifact missing",
            ),
            ArtifactOutcome::Skipped { reason } => self.event(
                Level::Debug,
                event_names::PARSE_SKIPPED,
                Stage::Parse,
                Some(kind),
                reason.clone(),
            ),
            ArtifactOutcome::Failed { code, error } => self
                .event(
                    Level::Warn,
                    event_names::PARSE_FAILED,
                    Stage::Parse,
                    Some(kind),
                    error.clone(),
                )
                .with_field("code", code),
        }
    }

    /// Record the final verdict.
    pub fn verdict(&self, verdict: &Verdict) -> LogEvent {
        self.event(
            Level::Info,
            event_names::RESOLVE_VERDICT,
            Stage::Resolve,
            None,
            format!("resolved {}", verdict.release),
        )
        .with_field("release", verdict.release.label())
        .with_field("is_rhel", verdict.is_rhel)
        .with_field("reasons", &verdict.reasons)
    }
}
