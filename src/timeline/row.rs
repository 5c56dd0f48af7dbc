use dioxus::prelude::*;

use crate::constants::{BG_ELEVATED, BG_HOVER, ROW_HEIGHT_PX, TAG_GRAY_MEDIUM, TAG_ORANGE, TEXT_MUTED};
use crate::core::layout::{OffscreenEdge, RowDirective, RowShape};
use crate::state::ColorTag;

/// One timeline row: wait connector, bar/halted/point geometry, duration
/// label, start circle, and edge wedges for off-screen extents.
#[component]
pub(crate) fn TimelineRow(
    directive: RowDirective,
    hovered: bool,
    on_hover: EventHandler<Option<String>>,
) -> Element {
    let row_bg = if hovered { BG_HOVER } else { "transparent" };
    let color = directive.color.map(ColorTag::css);
    let enter_id = directive.id.clone();

    let shape = match &directive.shape {
        RowShape::Bar { span, label, decorated } => {
            let bg = color.unwrap_or(TAG_GRAY_MEDIUM);
            let stripes = if *decorated {
                "background-image: repeating-linear-gradient(-45deg, transparent, transparent 4px, rgba(0,0,0,0.18) 4px, rgba(0,0,0,0.18) 8px);"
            } else {
                ""
            };
            let label_color = if directive.color.is_some_and(ColorTag::wants_dark_label) {
                "#cbd5e1"
            } else {
                "#ffffff"
            };
            rsx! {
                div {
                    style: "
                        position: absolute; top: 50%; transform: translateY(-50%);
                        left: {span.left}%; width: {span.width}%; height: 20px;
                        border-radius: 3px; background-color: {bg}; {stripes}
                        overflow: hidden;
                    ",
                }
                if let Some(label) = label {
                    div {
                        style: "
                            position: absolute; top: 50%; transform: translateY(-50%);
                            left: {label.span.left}%; width: {label.span.width}%; height: 20px;
                            display: flex; align-items: center; justify-content: center;
                            pointer-events: none;
                        ",
                        span {
                            style: "font-size: 11px; font-weight: 500; color: {label_color}; white-space: nowrap;",
                            "{label.text}"
                        }
                    }
                }
            }
        }
        RowShape::Halted { span, label } => {
            let pill = color.unwrap_or(TAG_ORANGE);
            rsx! {
                div {
                    style: "
                        position: absolute; top: 50%; transform: translateY(-50%);
                        left: {span.left}%; width: {span.width}%; height: 8px;
                        pointer-events: none;
                    ",
                    div { style: "position: absolute; left: 0; top: 0; width: 1px; height: 100%; background-color: {TEXT_MUTED};" }
                    div { style: "position: absolute; top: 50%; left: 0; width: 100%; border-top: 1px dashed {TEXT_MUTED};" }
                    div { style: "position: absolute; right: 0; top: 0; width: 1px; height: 100%; background-color: {TEXT_MUTED};" }
                }
                if let Some(label) = label {
                    div {
                        style: "
                            position: absolute; top: 50%; transform: translateY(-50%);
                            left: {label.span.left}%; width: {label.span.width}%; height: 20px;
                            display: flex; align-items: center; justify-content: center;
                            pointer-events: none;
                        ",
                        div {
                            style: "
                                padding: 0 8px; height: 20px; display: flex; align-items: center;
                                border-radius: 10px; background-color: {pill};
                                color: #ffffff; font-size: 11px; font-weight: 500; white-space: nowrap;
                            ",
                            "{label.text}"
                        }
                    }
                }
            }
        }
        RowShape::Point { left } => {
            let dot = color.unwrap_or(TEXT_MUTED);
            rsx! {
                div {
                    style: "
                        position: absolute; top: 50%; left: {left}%;
                        transform: translate(-50%, -50%);
                        width: 8px; height: 8px; border-radius: 50%;
                        background-color: {dot};
                    ",
                }
            }
        }
        RowShape::None => rsx! {},
    };

    let wedge = match (directive.offscreen, color) {
        (Some(OffscreenEdge::Left), Some(color)) => rsx! {
            div {
                style: "
                    position: absolute; left: 0; top: 50%; transform: translateY(-50%);
                    width: 0; height: 0;
                    border-top: 6px solid transparent;
                    border-bottom: 6px solid transparent;
                    border-right: 5px solid {color};
                    z-index: 3;
                ",
            }
        },
        (Some(OffscreenEdge::Right), Some(color)) => rsx! {
            div {
                style: "
                    position: absolute; right: 0; top: 50%; transform: translateY(-50%);
                    width: 0; height: 0;
                    border-top: 6px solid transparent;
                    border-bottom: 6px solid transparent;
                    border-left: 5px solid {color};
                    z-index: 3;
                ",
            }
        },
        _ => rsx! {},
    };

    rsx! {
        div {
            style: "position: relative; height: {ROW_HEIGHT_PX}px; background-color: {row_bg};",
            onmouseenter: move |_| on_hover.call(Some(enter_id.clone())),
            onmouseleave: move |_| on_hover.call(None),

            // Queued-wait connector between creation and start
            if let Some(wait) = directive.wait {
                if let Some(color) = color {
                    div {
                        style: "
                            position: absolute; top: 50%; transform: translateY(-50%);
                            left: {wait.left}%; width: {wait.width}%; height: 8px;
                            pointer-events: none;
                        ",
                        div { style: "position: absolute; left: 0; top: 0; width: 1px; height: 100%; background-color: {color};" }
                        div { style: "position: absolute; top: 50%; left: 0; width: 100%; border-top: 1px solid {color};" }
                        div { style: "position: absolute; right: 0; top: 0; width: 1px; height: 100%; background-color: {color};" }
                    }
                }
            }

            {shape}

            // Circle marking the bar's start instant
            if let Some(marker) = directive.start_marker {
                if let Some(color) = color {
                    div {
                        style: "
                            position: absolute; top: 50%; left: {marker}%;
                            transform: translate(-50%, -50%);
                            width: 8px; height: 8px; border-radius: 50%;
                            background-color: {BG_ELEVATED}; border: 2px solid {color};
                            box-sizing: border-box; z-index: 2;
                        ",
                    }
                }
            }

            // Edge wedges pointing at off-screen extents
            {wedge}
        }
    }
}
