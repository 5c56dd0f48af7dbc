//! Timeline panel components.
//!
//! The panel wires interaction state to the core engine and paints the row,
//! tick, and cursor directives the engine returns.

mod pan_controls;
mod panel;
mod row;
mod ruler;
mod tree_item;

pub use panel::TimelinePanel;
