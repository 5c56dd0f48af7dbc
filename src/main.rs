//! Jobscope
//!
//! A local-first inspector for hierarchical job execution traces.

mod app;
mod constants;
mod core;
mod hotkeys;
mod state;
mod timeline;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Jobscope")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
