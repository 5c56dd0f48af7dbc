//! Core timeline engine.
//!
//! Pure, renderer-agnostic building blocks invoked in a fixed pipeline:
//! tree indexing, visibility, viewport math, tick generation, key-event
//! snapping, and row/tick layout directives.

pub mod events;
pub mod format;
pub mod layout;
pub mod ticks;
pub mod tree;
pub mod viewport;
