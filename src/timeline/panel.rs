use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use std::time::{Duration, Instant};

use crate::constants::{
    BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, CURSOR_COLOR, RULER_HEIGHT_PX, SIDEBAR_WIDTH_PX,
    TEXT_DIM, TEXT_MUTED, TIMELINE_SNAP_THRESHOLD_PX, POINTER_FRAME_MS,
};
use crate::core::events::{collect_key_events, snap_threshold_time, snap_to_event};
use crate::core::format::format_duration;
use crate::core::layout::{layout_cursor, layout_rows, layout_snap_dots, layout_ticks};
use crate::core::ticks::generate_ticks;
use crate::core::tree::LogTree;
use crate::core::viewport::{PanDirection, Viewport};
use crate::state::LogEntry;

use super::pan_controls::PanBtn;
use super::row::TimelineRow;
use super::ruler::TimeRuler;
use super::tree_item::LogTreeItem;

/// Main timeline panel: log tree sidebar on the left, the zoomable time axis
/// on the right. Interaction state (expansion, hover, pointer) lives here;
/// the viewport is owned by the shell so hotkeys can drive it too. Swapping
/// in a new entry list rebuilds the tree and resets expansion state.
#[component]
pub fn TimelinePanel(
    entries: Vec<LogEntry>,
    viewport: Signal<Viewport>,
    container_width: Signal<Option<f64>>,
) -> Element {
    let mut viewport = viewport;
    let tree = use_memo(use_reactive!(|entries| LogTree::build(entries.clone())));
    let mut expanded = use_signal(|| tree.peek().default_expanded());
    use_effect(move || {
        expanded.set(tree.read().default_expanded());
    });
    let mut hovered = use_signal(|| None::<String>);
    let mut pointer_x = use_signal(|| None::<f64>);
    let mut last_pointer_update = use_signal(|| None::<Instant>);

    let visible = use_memo(move || tree.read().visible_rows(&expanded.read()));
    let key_events = use_memo(move || {
        let tree = tree.read();
        let visible = visible.read();
        collect_key_events(visible.iter().map(|&index| tree.entry(index)))
    });

    // Derived per render: cheap, and automatically tracks viewport,
    // expansion, and pointer changes.
    let view = viewport();
    let rows = {
        let tree = tree.read();
        let visible = visible.read();
        let expanded_set = expanded.read();
        layout_rows(&tree, &visible, &expanded_set, &view)
    };
    let tick_directives = layout_ticks(&generate_ticks(&view), &view);
    let snap_dots = layout_snap_dots(&key_events.read(), &view);

    let cursor = pointer_x().and_then(|x| {
        let width = container_width().unwrap_or(0.0);
        if width <= 0.0 {
            return None;
        }
        let raw_time = view.percent_to_time(x / width * 100.0);
        let threshold = snap_threshold_time(TIMELINE_SNAP_THRESHOLD_PX, width, view.duration);
        let snap = snap_to_event(&key_events.read(), raw_time, threshold);
        Some(layout_cursor(raw_time, snap, &view))
    });

    let duration_readout = format_duration(view.duration);
    let hovered_id = hovered();

    rsx! {
        div {
            style: "
                flex: 1; min-height: 0;
                display: grid; grid-template-columns: {SIDEBAR_WIDTH_PX}px 1fr;
                overflow-y: auto; overflow-x: hidden;
                background-color: {BG_ELEVATED};
            ",

            // ═══════════════════════════════════════════════════════════════
            // LEFT COLUMN - log tree
            // ═══════════════════════════════════════════════════════════════
            div {
                style: "border-right: 1px solid {BORDER_DEFAULT}; min-width: 0;",
                div {
                    style: "
                        position: sticky; top: 0; z-index: 15;
                        height: {RULER_HEIGHT_PX}px; min-height: {RULER_HEIGHT_PX}px;
                        display: flex; align-items: center; padding: 0 10px;
                        background-color: {BG_SURFACE};
                        border-bottom: 1px solid {BORDER_DEFAULT};
                        font-size: 10px; color: {TEXT_MUTED};
                        text-transform: uppercase; letter-spacing: 0.5px;
                    ",
                    "Execution log"
                }
                for directive in rows.iter() {
                    LogTreeItem {
                        key: "{directive.id}",
                        directive: directive.clone(),
                        hovered: hovered_id.as_deref() == Some(directive.id.as_str()),
                        on_hover: move |id| hovered.set(id),
                        on_toggle: move |id: String| {
                            let mut set = expanded.write();
                            if !set.insert(id.clone()) {
                                set.remove(&id);
                            }
                        },
                    }
                }
            }

            // ═══════════════════════════════════════════════════════════════
            // RIGHT COLUMN - time axis
            // ═══════════════════════════════════════════════════════════════
            div {
                id: "timeline-viewport-host",
                style: "position: relative; min-width: 0; cursor: crosshair;",
                onwheel: move |e| {
                    e.prevent_default();
                    let Some(width) = container_width() else {
                        return;
                    };
                    if width <= 0.0 {
                        return;
                    }
                    let (delta_x, delta_y) = wheel_delta_pixels(&e);
                    let modifiers = e.modifiers();
                    if modifiers.ctrl() || modifiers.alt() {
                        let fraction = e.element_coordinates().x / width;
                        viewport.write().zoom_step(delta_y < 0.0, fraction);
                    } else {
                        viewport.write().pan_by_pixels(delta_x + delta_y, width);
                    }
                },
                onmousemove: move |e| {
                    // Coalesce bursts of move events to one recompute per frame.
                    let now = Instant::now();
                    let gated = last_pointer_update()
                        .is_some_and(|prev| now.duration_since(prev) < Duration::from_millis(POINTER_FRAME_MS));
                    if gated {
                        return;
                    }
                    last_pointer_update.set(Some(now));
                    pointer_x.set(Some(e.element_coordinates().x));
                },
                onmouseleave: move |_| {
                    pointer_x.set(None);
                    last_pointer_update.set(None);
                },

                TimeRuler { ticks: tick_directives, snap_dots: snap_dots }

                div {
                    style: "position: relative;",
                    for directive in rows.iter() {
                        TimelineRow {
                            key: "{directive.id}",
                            directive: directive.clone(),
                            hovered: hovered_id.as_deref() == Some(directive.id.as_str()),
                            on_hover: move |id| hovered.set(id),
                        }
                    }
                }

                // Cursor line and readout
                if let Some(cursor) = cursor {
                    div {
                        style: "
                            position: absolute; top: 0; left: 0; width: 100%; height: 100%;
                            pointer-events: none; z-index: 18;
                        ",
                        div {
                            style: "
                                position: absolute; top: 0; left: {cursor.percent}%;
                                width: 1px; height: 100%; background-color: {CURSOR_COLOR};
                            ",
                        }
                        div {
                            style: "
                                position: absolute; top: {RULER_HEIGHT_PX + 4.0}px; left: {cursor.percent}%;
                                transform: translateX(-50%);
                                display: flex; align-items: center; gap: 5px;
                                padding: 2px 8px; border-radius: 5px;
                                background-color: {BG_SURFACE};
                                border: 1px solid {BORDER_DEFAULT};
                                font-size: 11px; color: {TEXT_DIM};
                                font-family: 'SF Mono', Consolas, monospace;
                                white-space: nowrap;
                            ",
                            if cursor.snapped {
                                span { style: "font-size: 10px;", "🧲" }
                            }
                            span { "{cursor.readout}" }
                        }
                    }
                }

                // Floating pan controls
                div {
                    style: "
                        position: sticky; bottom: 8px; z-index: 20;
                        display: flex; justify-content: center;
                        pointer-events: none;
                    ",
                    div {
                        style: "
                            display: flex; align-items: center; gap: 6px;
                            padding: 3px; border-radius: 16px;
                            background-color: {BG_SURFACE};
                            border: 1px solid {BORDER_DEFAULT};
                            pointer-events: auto;
                        ",
                        PanBtn {
                            icon: "◀",
                            on_click: move |_| viewport.write().pan_step(PanDirection::Left),
                        }
                        span {
                            style: "
                                min-width: 76px; text-align: center;
                                font-size: 10px; color: {TEXT_MUTED};
                                font-family: 'SF Mono', Consolas, monospace;
                            ",
                            "{duration_readout}"
                        }
                        PanBtn {
                            icon: "▶",
                            on_click: move |_| viewport.write().pan_step(PanDirection::Right),
                        }
                    }
                }
            }
        }
    }
}

/// Normalize a wheel delta to pixels regardless of the platform's delta mode.
fn wheel_delta_pixels(event: &WheelEvent) -> (f64, f64) {
    match event.delta() {
        WheelDelta::Pixels(v) => (v.x, v.y),
        WheelDelta::Lines(v) => (v.x * 16.0, v.y * 16.0),
        WheelDelta::Pages(v) => (v.x * 800.0, v.y * 800.0),
    }
}
