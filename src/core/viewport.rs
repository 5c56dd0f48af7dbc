//! Pannable, zoomable time window over a fixed-duration axis.
//!
//! The viewport is independent of the data range: panning past either end is
//! allowed, only the zoom level is bounded. All screen geometry downstream is
//! expressed in percent-of-container units derived from this window.

use crate::constants::{
    TIMELINE_INITIAL_SPAN_FACTOR, TIMELINE_LEAD_IN_FRACTION, TIMELINE_MAX_DURATION_FACTOR,
    TIMELINE_MIN_DURATION_FRACTION, TIMELINE_PAN_STEP_FRACTION, TIMELINE_ZOOM_STEP,
};

/// Pan direction for the footer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
}

/// The visible time window in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge of the window; may be negative.
    pub start: f64,
    /// Window length; always strictly positive.
    pub duration: f64,
    total: f64,
}

impl Viewport {
    /// Fit the window to a trace: 25% lead-in and 50% trailing padding so the
    /// whole timeline is visible with margin on load.
    pub fn fit(total_duration: f64) -> Self {
        let total = total_duration.max(0.01);
        Self {
            start: -TIMELINE_LEAD_IN_FRACTION * total,
            duration: TIMELINE_INITIAL_SPAN_FACTOR * total,
            total,
        }
    }

    /// The trace duration this viewport was fitted to.
    pub fn total_duration(&self) -> f64 {
        self.total
    }

    /// Right edge of the window.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Map a time to a percent-of-container position.
    pub fn time_to_percent(&self, time: f64) -> f64 {
        (time - self.start) / self.duration * 100.0
    }

    /// Inverse of [`Self::time_to_percent`].
    pub fn percent_to_time(&self, percent: f64) -> f64 {
        self.start + percent / 100.0 * self.duration
    }

    /// Map a span length to a percent-of-container width.
    pub fn span_to_percent(&self, span: f64) -> f64 {
        span / self.duration * 100.0
    }

    /// Zoom by one wheel step anchored at `cursor_fraction` of the container
    /// width: the time under the cursor stays at the same screen position.
    /// Returns false (state unchanged) when the step would leave the
    /// configured duration bounds.
    pub fn zoom_step(&mut self, zoom_in: bool, cursor_fraction: f64) -> bool {
        let new_duration = if zoom_in {
            self.duration / TIMELINE_ZOOM_STEP
        } else {
            self.duration * TIMELINE_ZOOM_STEP
        };
        self.zoom_to(new_duration, cursor_fraction)
    }

    /// Set an explicit window length anchored at `cursor_fraction`. Rejects
    /// durations outside `[min_fraction * total, max_factor * total]`; the
    /// comparison also rejects NaN candidates.
    pub fn zoom_to(&mut self, new_duration: f64, cursor_fraction: f64) -> bool {
        let min = self.total * TIMELINE_MIN_DURATION_FRACTION;
        let max = self.total * TIMELINE_MAX_DURATION_FACTOR;
        if !(new_duration >= min && new_duration <= max) {
            return false;
        }
        let anchor = self.start + cursor_fraction * self.duration;
        self.start = anchor - cursor_fraction * new_duration;
        self.duration = new_duration;
        true
    }

    /// Pan by a wheel delta in pixels. The shift is scaled by the current
    /// window length so pan speed is zoom-independent. No-ops without a
    /// container width.
    pub fn pan_by_pixels(&mut self, delta_px: f64, container_width: f64) {
        if container_width <= 0.0 {
            return;
        }
        self.start += delta_px / container_width * self.duration;
    }

    /// Fixed-step pan for the footer buttons.
    pub fn pan_step(&mut self, direction: PanDirection) {
        let step = self.duration * TIMELINE_PAN_STEP_FRACTION;
        match direction {
            PanDirection::Left => self.start -= step,
            PanDirection::Right => self.start += step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_gives_lead_in_and_padding() {
        let viewport = Viewport::fit(22.0);
        assert!((viewport.start + 5.5).abs() < 1e-12);
        assert!((viewport.duration - 33.0).abs() < 1e-12);
        assert!((viewport.end() - 27.5).abs() < 1e-12);
    }

    #[test]
    fn test_percent_round_trip() {
        let viewport = Viewport::fit(22.0);
        for &time in &[-10.0, -0.3, 0.0, 1.5, 22.0, 300.0] {
            let back = viewport.percent_to_time(viewport.time_to_percent(time));
            assert!((back - time).abs() < 1e-9, "{time} -> {back}");
        }
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut viewport = Viewport::fit(22.0);
        let cursor_fraction = 0.3;
        let anchor = viewport.start + cursor_fraction * viewport.duration;
        let before = viewport.time_to_percent(anchor);

        assert!(viewport.zoom_step(true, cursor_fraction));
        let after = viewport.time_to_percent(anchor);
        assert!((before - after).abs() < 1e-4, "anchor moved {before} -> {after}");
    }

    #[test]
    fn test_center_zoom_scenario() {
        // Viewport {start: -5, duration: 33} over a 22s trace, wheel-in at
        // the container midpoint.
        let mut viewport = Viewport::fit(22.0);
        viewport.start = -5.0;
        let anchor = viewport.start + 0.5 * viewport.duration;
        let before = viewport.time_to_percent(anchor);

        assert!(viewport.zoom_step(true, 0.5));
        assert!((viewport.duration - 33.0 / 1.1).abs() < 1e-9);
        let after = viewport.time_to_percent(anchor);
        assert!((before - after).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_rejected_outside_bounds() {
        let mut viewport = Viewport::fit(10.0);
        let saved = viewport;

        // Far below the floor (1% of total).
        assert!(!viewport.zoom_to(0.05, 0.5));
        assert_eq!(viewport, saved);

        // Above the ceiling (10x total).
        assert!(!viewport.zoom_to(150.0, 0.5));
        assert_eq!(viewport, saved);

        // Degenerate and NaN candidates are rejected, never applied.
        assert!(!viewport.zoom_to(0.0, 0.5));
        assert!(!viewport.zoom_to(-1.0, 0.5));
        assert!(!viewport.zoom_to(f64::NAN, 0.5));
        assert_eq!(viewport, saved);
    }

    #[test]
    fn test_zoom_out_to_ceiling_then_reject() {
        let mut viewport = Viewport::fit(10.0);
        let mut steps = 0;
        while viewport.zoom_step(false, 0.5) {
            steps += 1;
            assert!(steps < 200, "zoom-out never rejected");
        }
        assert!(viewport.duration <= 10.0 * TIMELINE_MAX_DURATION_FACTOR + 1e-9);
        assert!(viewport.duration > 0.0);
    }

    #[test]
    fn test_pan_is_unclamped() {
        let mut viewport = Viewport::fit(22.0);
        viewport.pan_by_pixels(-5000.0, 1000.0);
        assert!(viewport.start < -100.0);
        viewport.pan_by_pixels(20000.0, 1000.0);
        assert!(viewport.start > 100.0);
    }

    #[test]
    fn test_pan_speed_scales_with_duration() {
        let mut narrow = Viewport::fit(22.0);
        assert!(narrow.zoom_to(1.0, 0.5));
        let mut wide = Viewport::fit(22.0);

        let narrow_before = narrow.start;
        let wide_before = wide.start;
        narrow.pan_by_pixels(100.0, 1000.0);
        wide.pan_by_pixels(100.0, 1000.0);

        let narrow_shift = narrow.start - narrow_before;
        let wide_shift = wide.start - wide_before;
        assert!((narrow_shift - 0.1).abs() < 1e-9);
        assert!((wide_shift - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_pan_without_width_is_a_no_op() {
        let mut viewport = Viewport::fit(22.0);
        let saved = viewport;
        viewport.pan_by_pixels(100.0, 0.0);
        assert_eq!(viewport, saved);
    }

    #[test]
    fn test_button_pan_steps_ten_percent() {
        let mut viewport = Viewport::fit(22.0);
        let before = viewport.start;
        viewport.pan_step(PanDirection::Right);
        assert!((viewport.start - before - 3.3).abs() < 1e-9);
        viewport.pan_step(PanDirection::Left);
        assert!((viewport.start - before).abs() < 1e-9);
    }
}
