//! Hotkey system
//!
//! Centralized hotkey management for the trace viewer.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Zoom in on the timeline, anchored at the viewport center
    TimelineZoomIn,
    /// Zoom out on the timeline, anchored at the viewport center
    TimelineZoomOut,
    /// Pan the viewport one step earlier in time
    TimelinePanLeft,
    /// Pan the viewport one step later in time
    TimelinePanRight,
    /// Open a trace file.
    OpenTrace,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// # Arguments
/// * `key` - The key that was pressed
/// * `modifiers` - Modifier keys held (shift, ctrl, alt, meta)
/// * `context` - Current application context
///
/// # Returns
/// * `HotkeyResult::Action(action)` if a hotkey matched
/// * `HotkeyResult::NoMatch` if no binding exists
/// * `HotkeyResult::Suppressed` if input is focused
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    match key {
        Key::Character(c) if (ctrl || meta) && (c == "o" || c == "O") => {
            return HotkeyResult::Action(HotkeyAction::OpenTrace);
        }
        Key::Character(c) if c == "+" || c == "=" => {
            return HotkeyResult::Action(HotkeyAction::TimelineZoomIn)
        }
        Key::Character(c) if c == "-" => return HotkeyResult::Action(HotkeyAction::TimelineZoomOut),
        Key::ArrowLeft => return HotkeyResult::Action(HotkeyAction::TimelinePanLeft),
        Key::ArrowRight => return HotkeyResult::Action(HotkeyAction::TimelinePanRight),
        _ => {}
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_zooms_in() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn)));
    }

    #[test]
    fn test_minus_zooms_out() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("-".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomOut)));
    }

    #[test]
    fn test_arrows_pan() {
        let ctx = HotkeyContext::default();
        let left = handle_hotkey(&Key::ArrowLeft, false, false, false, false, &ctx);
        assert!(matches!(left, HotkeyResult::Action(HotkeyAction::TimelinePanLeft)));
        let right = handle_hotkey(&Key::ArrowRight, false, false, false, false, &ctx);
        assert!(matches!(right, HotkeyResult::Action(HotkeyAction::TimelinePanRight)));
    }

    #[test]
    fn test_ctrl_o_opens_trace() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("o".to_string()), false, true, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::OpenTrace)));
    }

    #[test]
    fn test_plain_o_does_nothing() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("o".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext { input_focused: true };
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
