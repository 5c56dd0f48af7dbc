//! Root application component
//!
//! This defines the main App component: the header chrome (trace picker,
//! open-file action, job status line) and the timeline panel. The shell owns
//! the viewport so hotkeys can drive it, observes the timeline container
//! width through an eval channel, and hands the panel a flat entry list.

use dioxus::prelude::*;
use std::time::Duration;

use crate::constants::{
    BG_DEEPEST, BG_SURFACE, BORDER_DEFAULT, HEADER_HEIGHT_PX, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY, TIMELINE_VIEWPORT_SCRIPT,
};
use crate::core::format::format_duration;
use crate::core::viewport::{PanDirection, Viewport};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{demo_jobs, Job};
use crate::timeline::TimelinePanel;

pub fn App() -> Element {
    let mut jobs = use_signal(demo_jobs);
    let mut selected_job = use_signal(|| 0usize);
    let initial_total = jobs.peek().first().map(|job| job.total_duration).unwrap_or(60.0);
    let mut viewport = use_signal(|| Viewport::fit(initial_total));

    // Live container width, fed by a ResizeObserver in the webview. Never
    // cached across frames: interaction handlers read the latest value.
    let timeline_viewport_width = use_signal(|| None::<f64>);
    let mut timeline_viewport_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if timeline_viewport_eval().is_some() {
            return;
        }
        let eval = document::eval(TIMELINE_VIEWPORT_SCRIPT);
        timeline_viewport_eval.set(Some(eval));
    });

    use_future(move || {
        let mut timeline_viewport_width = timeline_viewport_width.clone();
        let timeline_viewport_eval = timeline_viewport_eval.clone();
        async move {
            loop {
                let Some(eval) = timeline_viewport_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<f64>().await {
                        Ok(width) => {
                            let width = width.max(0.0);
                            if timeline_viewport_width() != Some(width) {
                                timeline_viewport_width.set(Some(width));
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    let mut open_trace = move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Trace JSON", &["json"])
            .pick_file()
        {
            match Job::load(&path) {
                Ok(job) => {
                    let total = job.total_duration;
                    let index = jobs.read().len();
                    jobs.write().push(job);
                    selected_job.set(index);
                    viewport.set(Viewport::fit(total));
                }
                Err(err) => eprintln!("Failed to load trace {}: {}", path.display(), err),
            }
        }
    };

    let job = jobs.read().get(selected_job()).cloned();
    let job_names: Vec<String> = jobs.read().iter().map(|job| job.name.clone()).collect();
    let selected = selected_job();
    let header_meta = job.as_ref().map(|job| {
        (
            job.status.color(),
            job.status.label(),
            format_duration(job.total_duration),
            job.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        )
    });

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_DEEPEST}; color: {TEXT_PRIMARY};
                font-family: 'Inter', 'Segoe UI', sans-serif;
                overflow: hidden; outline: none;
            ",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext { input_focused: false };
                let modifiers = e.modifiers();
                let shift = modifiers.shift();
                let ctrl = modifiers.ctrl();
                let alt = modifiers.alt();
                let meta = modifiers.meta();

                match handle_hotkey(&e.key(), shift, ctrl, alt, meta, &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::TimelineZoomIn => {
                                viewport.write().zoom_step(true, 0.5);
                            }
                            HotkeyAction::TimelineZoomOut => {
                                viewport.write().zoom_step(false, 0.5);
                            }
                            HotkeyAction::TimelinePanLeft => {
                                viewport.write().pan_step(PanDirection::Left);
                            }
                            HotkeyAction::TimelinePanRight => {
                                viewport.write().pan_step(PanDirection::Right);
                            }
                            HotkeyAction::OpenTrace => {
                                open_trace();
                            }
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            // Header
            header {
                style: "
                    display: flex; align-items: center; gap: 14px;
                    height: {HEADER_HEIGHT_PX}px; min-height: {HEADER_HEIGHT_PX}px;
                    padding: 0 14px;
                    background-color: {BG_SURFACE};
                    border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span {
                    style: "font-size: 12px; font-weight: 600; color: {TEXT_SECONDARY}; text-transform: uppercase; letter-spacing: 1px;",
                    "Jobscope"
                }

                select {
                    style: "
                        background-color: {BG_DEEPEST}; color: {TEXT_SECONDARY};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 5px;
                        font-size: 12px; padding: 3px 6px; max-width: 260px;
                    ",
                    onchange: move |e| {
                        if let Ok(index) = e.value().parse::<usize>() {
                            let total = jobs.read().get(index).map(|job| job.total_duration);
                            if let Some(total) = total {
                                selected_job.set(index);
                                viewport.set(Viewport::fit(total));
                            }
                        }
                    },
                    for (index, name) in job_names.iter().enumerate() {
                        option {
                            key: "{index}",
                            value: "{index}",
                            selected: index == selected,
                            "{name}"
                        }
                    }
                }

                button {
                    class: "pan-btn",
                    style: "
                        padding: 4px 10px; border: 1px solid {BORDER_DEFAULT}; border-radius: 5px;
                        background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer;
                    ",
                    onclick: move |_| open_trace(),
                    "Open Trace…"
                }

                // Job status line
                if let Some((status_color, status_label, total_label, created_label)) = header_meta {
                    div {
                        style: "margin-left: auto; display: flex; align-items: center; gap: 10px; font-size: 11px; color: {TEXT_DIM};",
                        span {
                            style: "display: flex; align-items: center; gap: 5px;",
                            span {
                                style: "width: 7px; height: 7px; border-radius: 50%; background-color: {status_color};",
                            }
                            span { style: "color: {TEXT_MUTED};", "{status_label}" }
                        }
                        span { "total {total_label}" }
                        span { "{created_label}" }
                    }
                }
            }

            if let Some(job) = job.as_ref() {
                TimelinePanel {
                    entries: job.entries.clone(),
                    viewport: viewport,
                    container_width: timeline_viewport_width,
                }
            }
        }
    }
}
