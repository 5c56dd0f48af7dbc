//! Adaptive tick generation for the time ruler.
//!
//! Intervals come from a fixed table of human-friendly step sizes; labels
//! collapse repeated whole-second prefixes so a zoomed-in ruler reads
//! `2s, +200ms, +400ms, ...` instead of repeating the second on every tick.

use std::collections::HashSet;

use crate::constants::TIMELINE_TARGET_TICK_COUNT;
use crate::core::viewport::Viewport;

const NICE_INTERVALS: [f64; 16] = [
    0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0,
];

/// One ruler tick: an axis time and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub time: f64,
    pub label: String,
}

/// Generate ticks covering the viewport, stepping at the smallest table
/// interval strictly greater than `duration / target_count`. The first tick
/// sits at or before the window start, the last at or after its end.
pub fn generate_ticks(viewport: &Viewport) -> Vec<Tick> {
    let raw_interval = viewport.duration / TIMELINE_TARGET_TICK_COUNT as f64;
    let interval = NICE_INTERVALS
        .iter()
        .copied()
        .find(|candidate| *candidate > raw_interval)
        .unwrap_or(NICE_INTERVALS[NICE_INTERVALS.len() - 1]);

    let first = (viewport.start / interval).floor() * interval;
    let last = (viewport.end() / interval).ceil() * interval;
    let steps = ((last - first) / interval).round() as i64;

    let mut shown_seconds: HashSet<i64> = HashSet::new();
    let mut ticks = Vec::with_capacity(steps as usize + 1);
    for step in 0..=steps {
        // Index-based stepping avoids accumulating float error across the walk.
        let time = first + step as f64 * interval;
        if let Some(label) = tick_label(time, &mut shown_seconds) {
            ticks.push(Tick { time, label });
        }
    }
    ticks
}

/// Label one tick. Sub-second ticks inside an already-labelled second render
/// as a `+Nms` offset; a zero offset suppresses the tick entirely.
fn tick_label(seconds: f64, shown_seconds: &mut HashSet<i64>) -> Option<String> {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let abs = seconds.abs();

    let mut whole = abs.floor() as i64;
    let mut ms = ((abs - whole as f64) * 1000.0).round() as i64;
    if ms >= 1000 {
        whole += 1;
        ms -= 1000;
    }

    if abs < 1.0 {
        return Some(format!("{sign}{ms}ms"));
    }

    let base_second = if sign == "-" { -whole } else { whole };
    if shown_seconds.contains(&base_second) {
        if ms > 0 {
            return Some(format!("+{ms}ms"));
        }
        return None;
    }

    shown_seconds.insert(base_second);
    Some(format!("{sign}{whole}s"))
}
