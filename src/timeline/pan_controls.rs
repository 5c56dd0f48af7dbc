use dioxus::prelude::*;

use crate::constants::{BG_HOVER, TEXT_MUTED};

/// Pan button for the floating footer controls
#[component]
pub(crate) fn PanBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            class: "pan-btn",
            style: "width: 26px; height: 26px; border: none; border-radius: 50%; background-color: {bg}; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: all 0.12s ease;",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
