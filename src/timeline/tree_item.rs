use dioxus::prelude::*;

use crate::constants::{
    BG_HOVER, BORDER_DEFAULT, INDENT_STEP_PX, ROW_HEIGHT_PX, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::core::layout::RowDirective;

/// Sidebar row of the log tree: ancestor guide lines, an elbow into the
/// entry, a chevron that replaces the icon on hover for collapsible entries,
/// and the label.
#[component]
pub(crate) fn LogTreeItem(
    directive: RowDirective,
    hovered: bool,
    on_hover: EventHandler<Option<String>>,
    on_toggle: EventHandler<String>,
) -> Element {
    let row_bg = if hovered { BG_HOVER } else { "transparent" };
    let cursor = if directive.collapsible { "pointer" } else { "default" };
    let pad = directive.indent as f64 * INDENT_STEP_PX + 8.0;
    let icon = directive.icon;
    let icon_color = icon.color();
    let glyph = icon.glyph();
    let chevron = if directive.expanded { "▾" } else { "▸" };
    let show_chevron = directive.collapsible && hovered;

    let enter_id = directive.id.clone();
    let click_id = directive.id.clone();
    let collapsible = directive.collapsible;

    rsx! {
        div {
            style: "
                position: relative; display: flex; align-items: center;
                height: {ROW_HEIGHT_PX}px; background-color: {row_bg};
                cursor: {cursor}; user-select: none;
            ",
            onmouseenter: move |_| on_hover.call(Some(enter_id.clone())),
            onmouseleave: move |_| on_hover.call(None),
            onclick: move |_| {
                if collapsible {
                    on_toggle.call(click_id.clone());
                }
            },

            // Ancestor guide lines and the elbow into this entry
            div {
                style: "position: absolute; left: -6px; top: 0; height: 100%; display: flex; pointer-events: none;",
                for (index, continues) in directive.guides.iter().enumerate() {
                    {
                        let border = if *continues {
                            format!("border-left: 1px solid {BORDER_DEFAULT};")
                        } else {
                            String::new()
                        };
                        rsx! {
                            div {
                                key: "guide-{index}",
                                style: "width: {INDENT_STEP_PX}px; height: 100%; {border}",
                            }
                        }
                    }
                }
                if directive.indent > 0 {
                    div {
                        style: "width: {INDENT_STEP_PX}px; height: 100%; position: relative;",
                        {
                            let rounding = if directive.is_last_sibling {
                                "border-bottom-left-radius: 6px;"
                            } else {
                                ""
                            };
                            rsx! {
                                div {
                                    style: "
                                        position: absolute; top: 0; left: 0; width: 50%; height: 50%;
                                        border-left: 1px solid {BORDER_DEFAULT};
                                        border-bottom: 1px solid {BORDER_DEFAULT};
                                        {rounding}
                                    ",
                                }
                            }
                        }
                        if !directive.is_last_sibling {
                            div {
                                style: "
                                    position: absolute; top: 50%; left: 0; width: 50%; height: 50%;
                                    border-left: 1px solid {BORDER_DEFAULT};
                                ",
                            }
                        }
                    }
                }
            }

            div {
                style: "
                    position: relative; display: flex; align-items: center; gap: 8px;
                    padding-left: {pad}px; padding-right: 8px;
                    width: 100%; min-width: 0; z-index: 1;
                ",
                div {
                    style: "width: 16px; height: 16px; display: flex; align-items: center; justify-content: center; flex-shrink: 0;",
                    if show_chevron {
                        span {
                            style: "font-size: 12px; color: {TEXT_MUTED}; line-height: 1;",
                            "{chevron}"
                        }
                    } else {
                        span {
                            style: "font-size: 13px; color: {icon_color}; line-height: 1;",
                            "{glyph}"
                        }
                    }
                }
                span {
                    style: "
                        font-size: 12px; color: {TEXT_SECONDARY};
                        white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                    ",
                    "{directive.label}"
                }
            }
        }
    }
}
