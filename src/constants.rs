//! Shared UI constants such as colors, panel sizing, and timeline tunables.
//! Interaction constants the source material treats as configuration
//! (snap threshold, zoom step, duration bounds) live here in one place.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

// Entry color tags. Gray variants are tuned for the charcoal background.
pub const TAG_BLUE: &str = "#3b82f6";
pub const TAG_GREEN: &str = "#22c55e";
pub const TAG_ORANGE: &str = "#f97316";
pub const TAG_PURPLE: &str = "#a855f7";
pub const TAG_GRAY_LIGHT: &str = "#334155";
pub const TAG_GRAY_MEDIUM: &str = "#64748b";

pub const CURSOR_COLOR: &str = "#ef4444";

// Layout
pub const ROW_HEIGHT_PX: f64 = 32.0;
pub const RULER_HEIGHT_PX: f64 = 32.0;
pub const SIDEBAR_WIDTH_PX: f64 = 320.0;
pub const INDENT_STEP_PX: f64 = 20.0;
pub const HEADER_HEIGHT_PX: f64 = 40.0;

// Timeline interaction tunables
pub const TIMELINE_SNAP_THRESHOLD_PX: f64 = 8.0;
pub const TIMELINE_ZOOM_STEP: f64 = 1.1;
pub const TIMELINE_MIN_DURATION_FRACTION: f64 = 0.01;
pub const TIMELINE_MAX_DURATION_FACTOR: f64 = 10.0;
pub const TIMELINE_LEAD_IN_FRACTION: f64 = 0.25;
pub const TIMELINE_INITIAL_SPAN_FACTOR: f64 = 1.5;
pub const TIMELINE_PAN_STEP_FRACTION: f64 = 0.1;
pub const TIMELINE_TARGET_TICK_COUNT: usize = 10;
pub const TICK_OVERSCAN_PERCENT: f64 = 20.0;
pub const TICK_LABEL_MARGIN_PERCENT: f64 = 3.0;
pub const MIN_BAR_LABEL_PERCENT: f64 = 4.0;
pub const POINTER_FRAME_MS: u64 = 16;

pub const TIMELINE_VIEWPORT_SCRIPT: &str = r#"
const hostId = "timeline-viewport-host";
let lastWidth = null;

function sendWidth() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const width = host.clientWidth || 0;
    if (lastWidth !== null && Math.abs(lastWidth - width) < 0.5) {
        return;
    }
    lastWidth = width;
    dioxus.send(width);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendWidth());
    observer.observe(host);
    window.addEventListener("resize", sendWidth, { passive: true });
    sendWidth();
}

attach();
await new Promise(() => {});
"#;
