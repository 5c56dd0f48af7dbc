//! Derived rendering directives for visible rows, ruler ticks, and the
//! cursor readout.
//!
//! Everything here is a pure function of the tree, the expanded set, and the
//! viewport. Geometry is expressed in percent-of-container units so any
//! renderer can paint the directives without further interpretation.

use std::collections::HashSet;

use crate::constants::{MIN_BAR_LABEL_PERCENT, TICK_LABEL_MARGIN_PERCENT, TICK_OVERSCAN_PERCENT};
use crate::core::events::KeyEvent;
use crate::core::format::format_duration;
use crate::core::ticks::Tick;
use crate::core::tree::LogTree;
use crate::core::viewport::Viewport;
use crate::state::{ColorTag, EntryIcon, EntryKind};

/// Which viewport edge an entry's whole extent sits beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffscreenEdge {
    Left,
    Right,
}

/// A horizontal span in percent-of-container units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

/// Inline duration label, clipped to the visible part of its bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub span: Span,
    pub text: String,
}

/// Time geometry of one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowShape {
    /// Solid execution bar.
    Bar { span: Span, label: Option<BarLabel>, decorated: bool },
    /// Dashed halted span; the label renders as a pill badge.
    Halted { span: Span, label: Option<BarLabel> },
    /// Point-in-time marker.
    Point { left: f64 },
    /// No time geometry; the row is a pure label.
    None,
}

/// Everything a renderer needs to paint one visible row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDirective {
    /// Arena index of the entry in its tree.
    pub entry_index: usize,
    pub id: String,
    pub label: String,
    pub indent: usize,
    pub kind: EntryKind,
    pub icon: EntryIcon,
    pub color: Option<ColorTag>,
    pub collapsible: bool,
    pub expanded: bool,
    /// One flag per ancestor, root-first: true means the ancestor has later
    /// siblings, so its guide line continues through this row.
    pub guides: Vec<bool>,
    pub is_last_sibling: bool,
    pub shape: RowShape,
    /// Queued-wait connector between creation and start.
    pub wait: Option<Span>,
    /// Circle marker percent at a solid bar's start.
    pub start_marker: Option<f64>,
    pub offscreen: Option<OffscreenEdge>,
}

/// One ruler tick, ready to paint. The line stays at its true position; only
/// the label is clamped away from the container edges.
#[derive(Debug, Clone, PartialEq)]
pub struct TickDirective {
    pub percent: f64,
    pub label_percent: f64,
    pub label: String,
}

/// Cursor line and readout state.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorDirective {
    pub percent: f64,
    pub readout: String,
    pub snapped: bool,
}

/// Compute directives for the given visible rows.
pub fn layout_rows(
    tree: &LogTree,
    visible: &[usize],
    expanded: &HashSet<String>,
    viewport: &Viewport,
) -> Vec<RowDirective> {
    visible
        .iter()
        .map(|&index| {
            let entry = tree.entry(index);
            let meta = tree.meta(index);

            let bar_span = entry
                .start_time
                .zip(entry.duration)
                .map(|(start, duration)| Span {
                    left: viewport.time_to_percent(start),
                    width: viewport.span_to_percent(duration),
                });

            let label = entry.start_time.zip(entry.duration).and_then(|(start, duration)| {
                bar_label(start, start + duration, duration, viewport)
            });

            let shape = match (entry.kind, bar_span, entry.time) {
                (EntryKind::Halted, Some(span), _) => RowShape::Halted { span, label },
                (_, Some(span), _) => RowShape::Bar {
                    span,
                    label,
                    decorated: entry.decorated,
                },
                (_, None, Some(time)) => RowShape::Point {
                    left: viewport.time_to_percent(time),
                },
                (_, None, None) => RowShape::None,
            };

            let wait = entry
                .create_time
                .zip(entry.start_time)
                .filter(|&(create, start)| create < start)
                .map(|(create, start)| Span {
                    left: viewport.time_to_percent(create),
                    width: viewport.span_to_percent(start - create),
                });

            let start_marker = match shape {
                RowShape::Bar { .. } => entry.start_time.map(|start| viewport.time_to_percent(start)),
                _ => None,
            };

            let guides = meta
                .ancestors
                .iter()
                .map(|&ancestor| !tree.meta(ancestor).is_last_sibling)
                .collect();

            RowDirective {
                entry_index: index,
                id: entry.id.clone(),
                label: entry.label.clone(),
                indent: entry.indent,
                kind: entry.kind,
                icon: entry.icon(),
                color: entry.color_tag,
                collapsible: entry.collapsible,
                expanded: expanded.contains(&entry.id),
                guides,
                is_last_sibling: meta.is_last_sibling,
                shape,
                wait,
                start_marker,
                offscreen: offscreen_edge(entry.start_time, entry.end_time(), entry.time, viewport),
            }
        })
        .collect()
}

/// Inline label over the visible intersection of a bar, suppressed when that
/// intersection is too narrow to read.
fn bar_label(start: f64, end: f64, duration: f64, viewport: &Viewport) -> Option<BarLabel> {
    let visible_start = start.max(viewport.start);
    let visible_end = end.min(viewport.end());
    if visible_end <= visible_start {
        return None;
    }
    let width = viewport.span_to_percent(visible_end - visible_start);
    if width < MIN_BAR_LABEL_PERCENT {
        return None;
    }
    Some(BarLabel {
        span: Span {
            left: viewport.time_to_percent(visible_start),
            width,
        },
        text: format_duration(duration),
    })
}

/// Total avoid-overlap rule: flagged only when the entire extent lies past an
/// edge. Partially visible bars are simply clipped by the container.
fn offscreen_edge(
    start: Option<f64>,
    end: Option<f64>,
    point: Option<f64>,
    viewport: &Viewport,
) -> Option<OffscreenEdge> {
    let past_left = end.is_some_and(|t| t < viewport.start)
        || point.is_some_and(|t| t < viewport.start);
    if past_left {
        return Some(OffscreenEdge::Left);
    }
    let past_right = start.is_some_and(|t| t > viewport.end())
        || point.is_some_and(|t| t > viewport.end());
    if past_right {
        return Some(OffscreenEdge::Right);
    }
    None
}

/// Convert generated ticks into paintable directives, dropping far-off-screen
/// ticks and clamping labels to stay readable near the edges.
pub fn layout_ticks(ticks: &[Tick], viewport: &Viewport) -> Vec<TickDirective> {
    ticks
        .iter()
        .filter_map(|tick| {
            let percent = viewport.time_to_percent(tick.time);
            if percent < -TICK_OVERSCAN_PERCENT || percent > 100.0 + TICK_OVERSCAN_PERCENT {
                return None;
            }
            Some(TickDirective {
                percent,
                label_percent: percent
                    .clamp(TICK_LABEL_MARGIN_PERCENT, 100.0 - TICK_LABEL_MARGIN_PERCENT),
                label: tick.label.clone(),
            })
        })
        .collect()
}

/// Snap-dot positions on the ruler for the on-screen key events.
pub fn layout_snap_dots(events: &[KeyEvent], viewport: &Viewport) -> Vec<f64> {
    events
        .iter()
        .map(|event| viewport.time_to_percent(event.time))
        .filter(|percent| (0.0..=100.0).contains(percent))
        .collect()
}

/// Cursor line and readout for a hover time, after snapping.
pub fn layout_cursor(raw_time: f64, snap: Option<KeyEvent>, viewport: &Viewport) -> CursorDirective {
    let display_time = snap.map(|event| event.time).unwrap_or(raw_time);
    CursorDirective {
        percent: viewport.time_to_percent(display_time),
        readout: format_duration(display_time),
        snapped: snap.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ticks::generate_ticks;
    use crate::state::LogEntry;

    fn viewport(start: f64, duration: f64) -> Viewport {
        let mut viewport = Viewport::fit(duration);
        viewport.start = start;
        viewport.duration = duration;
        viewport
    }

    fn tree() -> LogTree {
        LogTree::build(vec![
            LogEntry::new("root", None, 0, EntryKind::Task, "root")
                .created(0.0)
                .spanning(0.0, 20.0)
                .tagged(ColorTag::Blue)
                .collapsible()
                .striped(),
            LogEntry::new("halt", Some("root"), 1, EntryKind::Halted, "halted")
                .spanning(4.0, 2.0)
                .tagged(ColorTag::Orange),
            LogEntry::new("note", Some("root"), 1, EntryKind::Info, "note")
                .at(1.0)
                .tagged(ColorTag::Purple),
            LogEntry::new("late", Some("root"), 1, EntryKind::Step, "late")
                .created(17.5)
                .spanning(18.0, 1.0)
                .tagged(ColorTag::Green),
        ])
    }

    fn rows(view: &Viewport) -> Vec<RowDirective> {
        let tree = tree();
        let expanded = tree.default_expanded();
        let visible = tree.visible_rows(&expanded);
        layout_rows(&tree, &visible, &expanded, view)
    }

    #[test]
    fn test_bar_geometry_in_percent() {
        // Window 0..20 over the 20s root bar.
        let view = viewport(0.0, 20.0);
        let directives = rows(&view);
        match &directives[0].shape {
            RowShape::Bar { span, label, decorated } => {
                assert!((span.left - 0.0).abs() < 1e-9);
                assert!((span.width - 100.0).abs() < 1e-9);
                assert!(*decorated);
                assert_eq!(label.as_ref().unwrap().text, "20.000s");
            }
            other => panic!("expected bar, got {other:?}"),
        }
        assert_eq!(directives[0].start_marker, Some(0.0));
    }

    #[test]
    fn test_halted_and_point_shapes() {
        let view = viewport(0.0, 20.0);
        let directives = rows(&view);
        assert!(matches!(directives[1].shape, RowShape::Halted { .. }));
        // Halted spans never get a start circle.
        assert_eq!(directives[1].start_marker, None);
        match directives[2].shape {
            RowShape::Point { left } => assert!((left - 5.0).abs() < 1e-9),
            ref other => panic!("expected point, got {other:?}"),
        }
    }

    #[test]
    fn test_label_suppressed_when_sliver() {
        // Zoomed far out: the 1s "late" bar is under 4% of a 100s window.
        let view = viewport(0.0, 100.0);
        let directives = rows(&view);
        match &directives[3].shape {
            RowShape::Bar { label, .. } => assert!(label.is_none()),
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn test_label_clips_to_visible_intersection() {
        // Window 10..20 truncates the 0..20 root bar to its right half.
        let view = viewport(10.0, 10.0);
        let directives = rows(&view);
        match &directives[0].shape {
            RowShape::Bar { label, .. } => {
                let label = label.as_ref().unwrap();
                assert!((label.span.left - 0.0).abs() < 1e-9);
                assert!((label.span.width - 100.0).abs() < 1e-9);
                assert_eq!(label.text, "20.000s");
            }
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn test_offscreen_flags() {
        // Window past the whole trace: everything is off-screen left.
        let view = viewport(30.0, 10.0);
        for directive in rows(&view) {
            assert_eq!(directive.offscreen, Some(OffscreenEdge::Left), "{}", directive.id);
        }

        // Window before the trace: everything is off-screen right.
        let view = viewport(-15.0, 10.0);
        for directive in rows(&view) {
            assert_eq!(directive.offscreen, Some(OffscreenEdge::Right), "{}", directive.id);
        }

        // Partially visible bars carry no flag.
        let view = viewport(10.0, 10.0);
        assert_eq!(rows(&view)[0].offscreen, None);
    }

    #[test]
    fn test_wait_connector_requires_gap() {
        let view = viewport(0.0, 20.0);
        let directives = rows(&view);
        // Root creates and starts at the same instant: no connector.
        assert_eq!(directives[0].wait, None);
        // "late" waits 0.5s between creation and start.
        let wait = directives[3].wait.unwrap();
        assert!((wait.left - 87.5).abs() < 1e-9);
        assert!((wait.width - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_guides_follow_ancestor_sibling_state() {
        let tree = LogTree::build(vec![
            LogEntry::new("a", None, 0, EntryKind::Task, "a").collapsible(),
            LogEntry::new("a1", Some("a"), 1, EntryKind::Step, "a1"),
            LogEntry::new("b", None, 0, EntryKind::Task, "b"),
        ]);
        let expanded = tree.default_expanded();
        let visible = tree.visible_rows(&expanded);
        let view = viewport(0.0, 10.0);
        let directives = layout_rows(&tree, &visible, &expanded, &view);
        // "a" has a later sibling, so its guide continues through "a1".
        assert_eq!(directives[1].guides, vec![true]);
        assert!(directives[0].guides.is_empty());
    }

    #[test]
    fn test_empty_visible_set_produces_empty_output() {
        let tree = tree();
        let expanded = HashSet::new();
        let view = viewport(0.0, 20.0);
        let directives = layout_rows(&tree, &[], &expanded, &view);
        assert!(directives.is_empty());
    }

    #[test]
    fn test_tick_directives_drop_overscan_and_clamp_labels() {
        let view = viewport(0.0, 10.0);
        let ticks = generate_ticks(&view);
        let directives = layout_ticks(&ticks, &view);
        assert!(!directives.is_empty());
        for directive in &directives {
            assert!(directive.percent >= -TICK_OVERSCAN_PERCENT);
            assert!(directive.percent <= 100.0 + TICK_OVERSCAN_PERCENT);
            assert!(directive.label_percent >= TICK_LABEL_MARGIN_PERCENT);
            assert!(directive.label_percent <= 100.0 - TICK_LABEL_MARGIN_PERCENT);
        }
        // A tick just outside the edge keeps its true line position.
        if let Some(outside) = directives.iter().find(|d| d.percent > 100.0) {
            assert!(outside.label_percent < outside.percent);
        }
    }

    #[test]
    fn test_snap_dots_limited_to_container() {
        let view = viewport(0.0, 10.0);
        let tree = tree();
        let expanded = tree.default_expanded();
        let visible = tree.visible_rows(&expanded);
        let events = crate::core::events::collect_key_events(
            visible.iter().map(|&index| tree.entry(index)),
        );
        let dots = layout_snap_dots(&events, &view);
        assert!(!dots.is_empty());
        assert!(dots.iter().all(|p| (0.0..=100.0).contains(p)));
    }

    #[test]
    fn test_cursor_directive_prefers_snap() {
        let view = viewport(0.0, 10.0);
        let snap = KeyEvent {
            time: 4.0,
            kind: crate::core::events::KeyEventKind::Start,
        };
        let snapped = layout_cursor(4.03, Some(snap), &view);
        assert!((snapped.percent - 40.0).abs() < 1e-9);
        assert!(snapped.snapped);
        assert_eq!(snapped.readout, "4.000s");

        let free = layout_cursor(4.03, None, &view);
        assert!(!free.snapped);
        assert!((free.percent - 40.3).abs() < 1e-9);
    }
}
