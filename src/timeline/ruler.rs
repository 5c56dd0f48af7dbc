use dioxus::prelude::*;

use crate::constants::{BG_SURFACE, BORDER_DEFAULT, BORDER_STRONG, RULER_HEIGHT_PX, TEXT_DIM};
use crate::core::layout::TickDirective;

/// Time ruler with tick marks, labels, and snap-target dots.
/// All elements use pointer-events: none so wheel and hover events pass
/// through to the timeline container.
#[component]
pub(crate) fn TimeRuler(ticks: Vec<TickDirective>, snap_dots: Vec<f64>) -> Element {
    rsx! {
        div {
            style: "
                position: sticky; top: 0; z-index: 15;
                height: {RULER_HEIGHT_PX}px; min-height: {RULER_HEIGHT_PX}px;
                background-color: {BG_SURFACE};
                border-bottom: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",

            // Dots marking the instants the cursor can snap to
            for (index, dot) in snap_dots.iter().enumerate() {
                div {
                    key: "snap-{index}",
                    style: "
                        position: absolute; top: 50%; left: {dot}%;
                        width: 3px; height: 3px; margin-top: -1.5px;
                        border-radius: 50%; background-color: {BORDER_STRONG};
                        pointer-events: none;
                    ",
                }
            }

            for (index, tick) in ticks.iter().enumerate() {
                div {
                    key: "tick-{index}",
                    // The tick line, always at its true position
                    div {
                        style: "
                            position: absolute; left: {tick.percent}%; top: 0;
                            width: 1px; height: 100%;
                            background-color: {BORDER_DEFAULT};
                            pointer-events: none;
                        ",
                    }
                    // The label, clamped away from the container edges
                    div {
                        style: "
                            position: absolute; left: {tick.label_percent}%; top: 50%;
                            transform: translate(-50%, -50%);
                            padding: 0 4px; border-radius: 3px;
                            background-color: {BG_SURFACE};
                            font-size: 10px; color: {TEXT_DIM};
                            font-family: 'SF Mono', Consolas, monospace;
                            user-select: none; pointer-events: none;
                            white-space: nowrap;
                        ",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}
