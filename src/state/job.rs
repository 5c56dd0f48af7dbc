//! Trace data model
//!
//! This module contains the core data structures for an execution trace:
//! - Job: The top-level container for one traced execution
//! - LogEntry: One row of the hierarchical log (task, attempt, info, step, halted)
//! - Supporting enums for kinds, icons, color tags, and job status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::constants::{
    TAG_BLUE, TAG_GRAY_LIGHT, TAG_GRAY_MEDIUM, TAG_GREEN, TAG_ORANGE, TAG_PURPLE, TEXT_MUTED,
};

// =============================================================================
// Entry Kinds
// =============================================================================

/// The kind of a log entry. Categorizes rendering and default iconography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// A major unit of work.
    Task,
    /// A retry or execution wrapper around a task's work.
    Attempt,
    /// An informational message, usually a point in time.
    Info,
    /// A single step inside an attempt.
    Step,
    /// Execution paused while waiting for an external resource.
    Halted,
}

/// Icon shown next to an entry in the log tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryIcon {
    History,
    FileCode,
    Bot,
    CheckCircle,
    PauseCircle,
    Info,
}

impl EntryIcon {
    /// Glyph used by the renderer. The webview font covers these.
    pub fn glyph(self) -> &'static str {
        match self {
            EntryIcon::History => "↺",
            EntryIcon::FileCode => "▤",
            EntryIcon::Bot => "⚙",
            EntryIcon::CheckCircle => "✓",
            EntryIcon::PauseCircle => "⏸",
            EntryIcon::Info => "ℹ",
        }
    }

    /// Default glyph color.
    pub fn color(self) -> &'static str {
        match self {
            EntryIcon::History => TAG_PURPLE,
            EntryIcon::FileCode => TEXT_MUTED,
            EntryIcon::Bot => TEXT_MUTED,
            EntryIcon::CheckCircle => TAG_GREEN,
            EntryIcon::PauseCircle => TAG_ORANGE,
            EntryIcon::Info => TEXT_MUTED,
        }
    }
}

/// Styling tag for bars, wedges, and connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTag {
    Blue,
    Green,
    Orange,
    Purple,
    GrayLight,
    GrayMedium,
}

impl ColorTag {
    /// CSS color for this tag.
    pub fn css(self) -> &'static str {
        match self {
            ColorTag::Blue => TAG_BLUE,
            ColorTag::Green => TAG_GREEN,
            ColorTag::Orange => TAG_ORANGE,
            ColorTag::Purple => TAG_PURPLE,
            ColorTag::GrayLight => TAG_GRAY_LIGHT,
            ColorTag::GrayMedium => TAG_GRAY_MEDIUM,
        }
    }

    /// Whether duration labels on bars of this color need dark text.
    pub fn wants_dark_label(self) -> bool {
        matches!(self, ColorTag::GrayLight | ColorTag::GrayMedium)
    }
}

// =============================================================================
// Log Entries
// =============================================================================

/// One row of the hierarchical execution log.
///
/// Entries form a tree through `parent_id`; sibling order is the order of the
/// source list. All time fields are seconds relative to the job's time zero.
/// An entry with neither `start_time` nor `time` is a purely informational
/// label. References must be acyclic; that is a precondition of the tree
/// indexer, not a runtime check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Unique identifier within the job.
    pub id: String,
    /// Parent entry id; `None` marks a root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Nesting depth. Supplied directly by producers, matches tree depth.
    #[serde(default)]
    pub indent: usize,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Display label.
    pub label: String,
    /// Explicit icon override; falls back to a kind-derived icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<EntryIcon>,
    /// When the entry was registered/queued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<f64>,
    /// When execution began.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    /// Execution length; requires `start_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Point-in-time instant for instantaneous events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    /// Styling tag.
    #[serde(default, rename = "color", skip_serializing_if = "Option::is_none")]
    pub color_tag: Option<ColorTag>,
    /// Whether the entry can be collapsed to hide its subtree.
    #[serde(default, rename = "isCollapsible")]
    pub collapsible: bool,
    /// Striped-bar styling flag.
    #[serde(default, rename = "hasStripes")]
    pub decorated: bool,
}

impl LogEntry {
    /// Create a bare entry with no time geometry.
    pub fn new(
        id: impl Into<String>,
        parent_id: Option<&str>,
        indent: usize,
        kind: EntryKind,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            indent,
            kind,
            label: label.into(),
            icon: None,
            create_time: None,
            start_time: None,
            duration: None,
            time: None,
            color_tag: None,
            collapsible: false,
            decorated: false,
        }
    }

    /// Set execution span.
    pub fn spanning(mut self, start_time: f64, duration: f64) -> Self {
        self.start_time = Some(start_time);
        self.duration = Some(duration);
        self
    }

    /// Set the queued/registered instant.
    pub fn created(mut self, create_time: f64) -> Self {
        self.create_time = Some(create_time);
        self
    }

    /// Set a point-in-time instant.
    pub fn at(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the styling tag.
    pub fn tagged(mut self, tag: ColorTag) -> Self {
        self.color_tag = Some(tag);
        self
    }

    /// Set an explicit icon.
    pub fn with_icon(mut self, icon: EntryIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Mark the entry collapsible.
    pub fn collapsible(mut self) -> Self {
        self.collapsible = true;
        self
    }

    /// Enable striped styling.
    pub fn striped(mut self) -> Self {
        self.decorated = true;
        self
    }

    /// End of the execution span, if the entry has one.
    pub fn end_time(&self) -> Option<f64> {
        match (self.start_time, self.duration) {
            (Some(start), Some(duration)) => Some(start + duration),
            _ => None,
        }
    }

    /// Icon to render, falling back on the entry kind.
    pub fn icon(&self) -> EntryIcon {
        self.icon.unwrap_or(match self.kind {
            EntryKind::Task => EntryIcon::FileCode,
            EntryKind::Attempt => EntryIcon::Bot,
            EntryKind::Info => EntryIcon::Info,
            EntryKind::Step => EntryIcon::CheckCircle,
            EntryKind::Halted => EntryIcon::PauseCircle,
        })
    }
}

// =============================================================================
// Jobs
// =============================================================================

/// Overall status of a traced job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
}

impl JobStatus {
    /// Human-readable status label.
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::InProgress => "in progress",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    /// Status accent color.
    pub fn color(self) -> &'static str {
        match self {
            JobStatus::Queued => TAG_GRAY_MEDIUM,
            JobStatus::InProgress => TAG_BLUE,
            JobStatus::Completed => TAG_GREEN,
            JobStatus::Failed => TAG_ORANGE,
        }
    }
}

/// One traced execution: metadata plus the flat, ordered entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier.
    pub id: String,
    /// Display name, usually the triggering artifact.
    pub name: String,
    /// Overall status.
    pub status: JobStatus,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// Fixed axis bound in seconds the viewport is fitted to.
    pub total_duration: f64,
    /// Flat entry list in display order.
    pub entries: Vec<LogEntry>,
}

impl Job {
    /// Load a trace from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let job: Job = serde_json::from_str(&json)?;
        Ok(job)
    }

    /// Save the trace to a JSON file.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_end_time() {
        let entry = LogEntry::new("a", None, 0, EntryKind::Step, "step").spanning(0.5, 3.0);
        assert_eq!(entry.end_time(), Some(3.5));

        let bare = LogEntry::new("b", None, 0, EntryKind::Info, "note");
        assert_eq!(bare.end_time(), None);
    }

    #[test]
    fn test_icon_fallback_by_kind() {
        let halted = LogEntry::new("h", None, 0, EntryKind::Halted, "waiting");
        assert_eq!(halted.icon(), EntryIcon::PauseCircle);

        let explicit = halted.with_icon(EntryIcon::History);
        assert_eq!(explicit.icon(), EntryIcon::History);
    }

    #[test]
    fn test_entry_wire_format() {
        let entry = LogEntry::new("1", Some("0"), 1, EntryKind::Task, "generate-report")
            .created(0.0)
            .spanning(0.0, 20.0)
            .tagged(ColorTag::Blue)
            .with_icon(EntryIcon::FileCode)
            .collapsible()
            .striped();
        let json = serde_json::to_string(&entry).unwrap();
        // Field names must match the dashboard export format.
        assert!(json.contains("\"parentId\":\"0\""));
        assert!(json.contains("\"type\":\"task\""));
        assert!(json.contains("\"icon\":\"file-code\""));
        assert!(json.contains("\"createTime\":0.0"));
        assert!(json.contains("\"startTime\":0.0"));
        assert!(json.contains("\"color\":\"blue\""));
        assert!(json.contains("\"isCollapsible\":true"));
        assert!(json.contains("\"hasStripes\":true"));

        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_job_serialization_round_trip() {
        let job = Job {
            id: "job_1".to_string(),
            name: "transcribe-video".to_string(),
            status: JobStatus::Completed,
            created_at: Utc::now(),
            total_duration: 18.5,
            entries: vec![LogEntry::new("1", None, 0, EntryKind::Task, "root").spanning(0.0, 18.5)],
        };
        let json = serde_json::to_string_pretty(&job).unwrap();
        let parsed: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, job);
        assert!(json.contains("\"totalDuration\""));
    }

    #[test]
    fn test_minimal_entry_deserializes_with_defaults() {
        let json = r#"{"id":"x","type":"info","label":"note"}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.parent_id, None);
        assert_eq!(entry.indent, 0);
        assert!(!entry.collapsible);
        assert!(!entry.decorated);
        assert_eq!(entry.start_time, None);
    }
}
