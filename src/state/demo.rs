//! Built-in demo traces.
//!
//! Shipped so the viewer opens with something to look at before a trace file
//! is loaded. The two jobs cover the interesting cases: queued-wait
//! connectors, a halted span, point events, and a deep task/attempt tree.

use chrono::{TimeZone, Utc};

use super::{ColorTag, EntryIcon, EntryKind, Job, JobStatus, LogEntry};

/// The demo traces, first one selected on startup.
pub fn demo_jobs() -> Vec<Job> {
    vec![generate_report_job(), transcribe_video_job()]
}

fn generate_report_job() -> Job {
    let entries = vec![
        LogEntry::new("0", None, 0, EntryKind::Info, "Job registered in queue")
            .with_icon(EntryIcon::History)
            .at(0.0)
            .tagged(ColorTag::Purple),
        LogEntry::new("1", None, 0, EntryKind::Task, "generate-report")
            .with_icon(EntryIcon::FileCode)
            .created(0.0)
            .spanning(0.0, 20.0)
            .tagged(ColorTag::Blue)
            .collapsible()
            .striped(),
        LogEntry::new("2", Some("1"), 1, EntryKind::Attempt, "Attempt 1")
            .created(0.1)
            .spanning(0.1, 19.9)
            .tagged(ColorTag::Blue)
            .collapsible(),
        LogEntry::new("3", Some("2"), 2, EntryKind::Step, "Fetch database records")
            .created(0.2)
            .spanning(0.5, 3.0)
            .tagged(ColorTag::Green),
        LogEntry::new("4", Some("2"), 2, EntryKind::Halted, "Job halted, waiting for resources...")
            .spanning(4.0, 2.0)
            .tagged(ColorTag::Orange),
        LogEntry::new("5", Some("2"), 2, EntryKind::Step, "Waiting for image renderer...")
            .with_icon(EntryIcon::FileCode)
            .created(6.0)
            .spanning(6.5, 7.0)
            .tagged(ColorTag::GrayMedium),
        LogEntry::new("6", Some("2"), 2, EntryKind::Step, "Render charts")
            .with_icon(EntryIcon::FileCode)
            .created(13.5)
            .spanning(14.0, 4.6)
            .tagged(ColorTag::Blue),
        LogEntry::new("7", Some("2"), 2, EntryKind::Step, "Assemble PDF")
            .with_icon(EntryIcon::FileCode)
            .created(18.6)
            .spanning(18.8, 1.2)
            .tagged(ColorTag::Green),
    ];

    Job {
        id: "job_report".to_string(),
        name: "generate-report-weekly.pdf".to_string(),
        status: JobStatus::InProgress,
        created_at: Utc.with_ymd_and_hms(2023, 10, 26, 12, 0, 0).unwrap(),
        total_duration: 22.0,
        entries,
    }
}

fn transcribe_video_job() -> Job {
    let entries = vec![
        LogEntry::new("t", None, 0, EntryKind::Task, "transcribe-video")
            .with_icon(EntryIcon::FileCode)
            .spanning(0.0, 18.5)
            .tagged(ColorTag::Blue)
            .collapsible()
            .striped(),
        LogEntry::new("t.1", Some("t"), 1, EntryKind::Attempt, "Attempt 1")
            .spanning(0.1, 18.4)
            .tagged(ColorTag::GrayLight)
            .collapsible(),
        LogEntry::new("t.1.ex", Some("t.1"), 2, EntryKind::Task, "extract-audio")
            .with_icon(EntryIcon::FileCode)
            .spanning(0.2, 11.8)
            .tagged(ColorTag::Blue)
            .collapsible()
            .striped(),
        LogEntry::new("t.1.ex.1", Some("t.1.ex"), 3, EntryKind::Attempt, "Attempt 1")
            .spanning(0.3, 11.7)
            .tagged(ColorTag::GrayLight)
            .collapsible(),
        LogEntry::new("t.1.ex.1.f", Some("t.1.ex.1"), 4, EntryKind::Info, "Fetch video from URL")
            .at(1.0)
            .tagged(ColorTag::Purple),
        LogEntry::new("t.1.ex.1.x", Some("t.1.ex.1"), 4, EntryKind::Step, "Extract audio using FFmpeg")
            .with_icon(EntryIcon::FileCode)
            .spanning(1.1, 5.0)
            .tagged(ColorTag::GrayMedium),
        LogEntry::new("t.1.tr", Some("t.1"), 2, EntryKind::Task, "transcribe-audio")
            .with_icon(EntryIcon::FileCode)
            .created(6.4)
            .spanning(6.5, 12.0)
            .tagged(ColorTag::Blue)
            .collapsible()
            .striped(),
        LogEntry::new("t.1.tr.1", Some("t.1.tr"), 3, EntryKind::Attempt, "Attempt 1")
            .spanning(6.6, 11.9)
            .tagged(ColorTag::GrayLight)
            .collapsible(),
        LogEntry::new("t.1.tr.1.c", Some("t.1.tr.1"), 4, EntryKind::Step, "transcribe.audio()")
            .with_icon(EntryIcon::FileCode)
            .spanning(7.0, 4.0)
            .tagged(ColorTag::GrayMedium),
        LogEntry::new("t.1.tr.1.s", Some("t.1.tr.1"), 4, EntryKind::Info, "Audio summary created")
            .at(12.0)
            .tagged(ColorTag::Purple),
        LogEntry::new("t.1.up", Some("t.1"), 2, EntryKind::Task, "upload-to-s3")
            .with_icon(EntryIcon::FileCode)
            .created(12.9)
            .spanning(13.0, 5.5)
            .tagged(ColorTag::Blue)
            .collapsible()
            .striped(),
        LogEntry::new("t.1.up.1", Some("t.1.up"), 3, EntryKind::Attempt, "Attempt 1")
            .spanning(13.1, 5.4)
            .tagged(ColorTag::GrayLight)
            .collapsible(),
        LogEntry::new("t.1.up.1.u", Some("t.1.up.1"), 4, EntryKind::Step, "s3.upload()")
            .spanning(15.0, 2.0)
            .tagged(ColorTag::Green),
        LogEntry::new("t.1.up.1.d", Some("t.1.up.1"), 4, EntryKind::Info, "Transcribed audio file upload")
            .at(17.5)
            .tagged(ColorTag::Purple),
    ];

    Job {
        id: "job_transcribe".to_string(),
        name: "transcribe-video-123.mp4".to_string(),
        status: JobStatus::Completed,
        created_at: Utc.with_ymd_and_hms(2023, 10, 26, 10, 0, 0).unwrap(),
        total_duration: 18.5,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_unique_and_parents_resolve() {
        for job in demo_jobs() {
            let mut ids = HashSet::new();
            for entry in &job.entries {
                assert!(ids.insert(entry.id.clone()), "duplicate id {}", entry.id);
            }
            for entry in &job.entries {
                if let Some(parent) = &entry.parent_id {
                    assert!(ids.contains(parent), "dangling parent {}", parent);
                }
            }
        }
    }

    #[test]
    fn test_demo_spans_fit_total_duration() {
        for job in demo_jobs() {
            for entry in &job.entries {
                if let Some(end) = entry.end_time() {
                    assert!(end <= job.total_duration + 1e-9, "{} overruns", entry.id);
                }
                if let Some(duration) = entry.duration {
                    assert!(duration >= 0.0);
                }
            }
        }
    }
}
