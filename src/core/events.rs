//! Key-event index and magnetic snap queries.
//!
//! Every significant instant of the visible entries (creation, start, end,
//! point events) becomes a snap target. The cursor readout snaps to the
//! nearest target within a pixel-derived threshold.

use std::collections::HashSet;

use crate::state::LogEntry;

/// Category of a key event instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Create,
    Start,
    End,
    Point,
}

/// One snap target on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub time: f64,
    pub kind: KeyEventKind,
}

/// Collect the instants of the given entries, deduplicated by `(time, kind)`
/// and sorted ascending by time.
pub fn collect_key_events<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> Vec<KeyEvent> {
    let mut seen: HashSet<(i64, KeyEventKind)> = HashSet::new();
    let mut events: Vec<KeyEvent> = Vec::new();
    {
        // Microsecond-rounded key; instants closer than that are duplicates.
        let mut push = |time: f64, kind: KeyEventKind| {
            if seen.insert(((time * 1e6).round() as i64, kind)) {
                events.push(KeyEvent { time, kind });
            }
        };

        for entry in entries {
            if let Some(time) = entry.create_time {
                push(time, KeyEventKind::Create);
            }
            if let Some(time) = entry.start_time {
                push(time, KeyEventKind::Start);
            }
            if let Some(time) = entry.end_time() {
                push(time, KeyEventKind::End);
            }
            if let Some(time) = entry.time {
                push(time, KeyEventKind::Point);
            }
        }
    }
    events.sort_by(|a, b| a.time.total_cmp(&b.time));
    events
}

/// Convert the pixel snap threshold into time units at the current scale.
pub fn snap_threshold_time(threshold_px: f64, container_width: f64, viewport_duration: f64) -> f64 {
    if container_width <= 0.0 {
        return 0.0;
    }
    threshold_px / container_width * viewport_duration
}

/// Nearest event strictly within `threshold` of `raw_time`. Ties keep the
/// first match in time order, so repeated queries are stable.
pub fn snap_to_event(events: &[KeyEvent], raw_time: f64, threshold: f64) -> Option<KeyEvent> {
    if threshold <= 0.0 {
        return None;
    }
    let mut best: Option<KeyEvent> = None;
    let mut best_distance = f64::INFINITY;
    for event in events {
        let distance = (event.time - raw_time).abs();
        if distance < best_distance && distance < threshold {
            best_distance = distance;
            best = Some(*event);
        }
    }
    best
}
