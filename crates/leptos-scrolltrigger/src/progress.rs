//! Scroll window resolution and progress math.
//!
//! Everything here is pure: the DOM layer feeds in element geometry and
//! the current scroll offset, and gets back progress values and playback
//! commands.

/// A scroll position expressed as "element fraction meets viewport fraction".
///
/// `ScrollPoint::new(0.0, 0.8)` reads as "element top meets 80% of the
/// viewport height", the usual "top 80%" shorthand. Fraction 0.0 is the
/// top edge, 1.0 the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPoint {
    pub element_frac: f64,
    pub viewport_frac: f64,
}

impl ScrollPoint {
    pub const fn new(element_frac: f64, viewport_frac: f64) -> Self {
        ScrollPoint {
            element_frac,
            viewport_frac,
        }
    }

    /// "top 80%" style: element top meets the given viewport fraction.
    pub const fn top(viewport_frac: f64) -> Self {
        ScrollPoint::new(0.0, viewport_frac)
    }

    /// Element top meets viewport bottom (the element just appears).
    pub const TOP_BOTTOM: ScrollPoint = ScrollPoint::new(0.0, 1.0);
    /// Element top meets viewport top.
    pub const TOP_TOP: ScrollPoint = ScrollPoint::new(0.0, 0.0);
    /// Element bottom meets viewport top (the element just disappears).
    pub const BOTTOM_TOP: ScrollPoint = ScrollPoint::new(1.0, 0.0);
    /// Element bottom meets viewport bottom.
    pub const BOTTOM_BOTTOM: ScrollPoint = ScrollPoint::new(1.0, 1.0);
}

/// Where a trigger window ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowEnd {
    /// Another element/viewport alignment.
    Point(ScrollPoint),
    /// A fixed number of pixels of scroll past the start.
    Px(f64),
    /// A multiple of the viewport height past the start ("+=200%" is 2.0).
    ViewportHeights(f64),
    /// The measured element's content width (scrollWidth) in pixels past
    /// the start, used by pinned horizontal sections.
    ElementScrollWidth,
}

/// Element geometry sampled by the DOM layer at bind/refresh time.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementMetrics {
    /// Element top in document coordinates (rect.top + scroll_y).
    pub doc_top: f64,
    pub height: f64,
    /// Content width of the measured element, zero when unused.
    pub scroll_width: f64,
}

/// A resolved scroll range in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    pub start: f64,
    pub end: f64,
}

impl ScrollWindow {
    /// Raw (unclamped) progress of `scroll_y` through the window.
    pub fn raw_progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll_y < self.start { 0.0 } else { 1.0 };
        }
        (scroll_y - self.start) / span
    }

    /// Progress clamped to [0, 1].
    pub fn progress(&self, scroll_y: f64) -> f64 {
        self.raw_progress(scroll_y).clamp(0.0, 1.0)
    }

    /// Scroll offset corresponding to a progress value.
    pub fn scroll_for(&self, progress: f64) -> f64 {
        self.start + (self.end - self.start) * progress
    }
}

/// Resolve a (start, end) pair against measured geometry.
pub fn resolve_window(
    start: ScrollPoint,
    end: WindowEnd,
    metrics: ElementMetrics,
    viewport_h: f64,
) -> ScrollWindow {
    let point = |p: ScrollPoint| {
        metrics.doc_top + p.element_frac * metrics.height - p.viewport_frac * viewport_h
    };
    let start_px = point(start);
    let end_px = match end {
        WindowEnd::Point(p) => point(p),
        WindowEnd::Px(px) => start_px + px,
        WindowEnd::ViewportHeights(n) => start_px + n * viewport_h,
        WindowEnd::ElementScrollWidth => start_px + metrics.scroll_width,
    };
    ScrollWindow {
        start: start_px,
        end: end_px,
    }
}

/// Which side of the trigger window the scroll position is on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Zone {
    Before,
    Inside,
    After,
}

pub fn zone_of(raw_progress: f64) -> Zone {
    if raw_progress < 0.0 {
        Zone::Before
    } else if raw_progress > 1.0 {
        Zone::After
    } else {
        Zone::Inside
    }
}

/// Playback command for a discrete (non-scrub) trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    Forward,
    Reverse,
}

/// Enter/leave policy: play forward when the window is entered from either
/// side, reverse when it is left in either direction. Re-entering after a
/// reverse plays forward again; nothing replays beyond that symmetry.
pub fn toggle_command(prev: Zone, next: Zone) -> Option<Playback> {
    match (prev, next) {
        (Zone::Before, Zone::Inside) | (Zone::After, Zone::Inside) => Some(Playback::Forward),
        (Zone::Inside, Zone::Before) | (Zone::Inside, Zone::After) => Some(Playback::Reverse),
        _ => None,
    }
}

/// One smoothing step for a scrubbed value.
///
/// `smooth` is the catch-up horizon in seconds; the playhead closes the
/// gap to `target` exponentially so that after `smooth` seconds roughly
/// 63% of the remaining distance is covered. Zero means direct binding.
pub fn scrub_step(current: f64, target: f64, dt: f64, smooth: f64) -> f64 {
    if smooth <= 0.0 || dt <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt / smooth).exp();
    current + (target - current) * alpha
}

/// True when a scrubbed playhead is close enough to stop ticking.
pub fn scrub_settled(current: f64, target: f64) -> bool {
    (target - current).abs() < 1e-4
}

/// Nearest snap target among `count` evenly spaced stops (0, 1/(n-1), ... 1).
///
/// Returns `progress` unchanged when there are fewer than two stops.
pub fn snap_target(progress: f64, count: usize) -> f64 {
    if count < 2 {
        return progress;
    }
    let steps = (count - 1) as f64;
    (progress * steps).round() / steps
}

/// Progress of one panel's sub-timeline inside a pinned horizontal strip.
///
/// The strip of `panel_count` viewport-wide panels translates from 0 to
/// -(count-1) widths as `container_progress` runs 0..1. A panel's window
/// opens when its left edge meets the viewport's right edge and closes
/// when its right edge meets the viewport's left edge, so each panel sees
/// two panel-widths of travel.
pub fn panel_progress(container_progress: f64, panel_index: usize, panel_count: usize) -> f64 {
    if panel_count < 2 {
        return 1.0;
    }
    let shift = container_progress.clamp(0.0, 1.0) * (panel_count - 1) as f64;
    ((shift - (panel_index as f64 - 1.0)) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_metrics(doc_top: f64, height: f64) -> ElementMetrics {
        ElementMetrics {
            doc_top,
            height,
            scroll_width: 0.0,
        }
    }

    #[test]
    fn test_resolve_top_80() {
        // Element at 2000px, viewport 1000px: "top 80%" fires at 1200px.
        let w = resolve_window(
            ScrollPoint::top(0.8),
            WindowEnd::Point(ScrollPoint::BOTTOM_TOP),
            make_metrics(2000.0, 600.0),
            1000.0,
        );
        assert_eq!(w.start, 1200.0);
        // "bottom top": element bottom (2600) meets viewport top.
        assert_eq!(w.end, 2600.0);
    }

    #[test]
    fn test_resolve_viewport_extent() {
        let w = resolve_window(
            ScrollPoint::TOP_TOP,
            WindowEnd::ViewportHeights(2.0),
            make_metrics(3000.0, 800.0),
            1000.0,
        );
        assert_eq!(w.start, 3000.0);
        assert_eq!(w.end, 5000.0);
    }

    #[test]
    fn test_resolve_scroll_width_extent() {
        let metrics = ElementMetrics {
            doc_top: 4000.0,
            height: 900.0,
            scroll_width: 2716.0,
        };
        let w = resolve_window(
            ScrollPoint::TOP_TOP,
            WindowEnd::ElementScrollWidth,
            metrics,
            900.0,
        );
        assert_eq!(w.end - w.start, 2716.0);
    }

    #[test]
    fn test_progress_clamps() {
        let w = ScrollWindow {
            start: 100.0,
            end: 300.0,
        };
        assert_eq!(w.progress(0.0), 0.0);
        assert_eq!(w.progress(200.0), 0.5);
        assert_eq!(w.progress(900.0), 1.0);
        assert!(w.raw_progress(900.0) > 1.0);
    }

    #[test]
    fn test_degenerate_window() {
        let w = ScrollWindow {
            start: 500.0,
            end: 500.0,
        };
        assert_eq!(w.progress(499.0), 0.0);
        assert_eq!(w.progress(501.0), 1.0);
    }

    #[test]
    fn test_scroll_for_inverts_progress() {
        let w = ScrollWindow {
            start: 1000.0,
            end: 4000.0,
        };
        let p = w.progress(2500.0);
        assert_eq!(w.scroll_for(p), 2500.0);
    }

    #[test]
    fn test_toggle_enter_and_leave() {
        assert_eq!(
            toggle_command(Zone::Before, Zone::Inside),
            Some(Playback::Forward)
        );
        assert_eq!(
            toggle_command(Zone::Inside, Zone::Before),
            Some(Playback::Reverse)
        );
        assert_eq!(
            toggle_command(Zone::Inside, Zone::After),
            Some(Playback::Reverse)
        );
        assert_eq!(
            toggle_command(Zone::After, Zone::Inside),
            Some(Playback::Forward)
        );
    }

    #[test]
    fn test_toggle_no_command_without_boundary_cross() {
        assert_eq!(toggle_command(Zone::Inside, Zone::Inside), None);
        assert_eq!(toggle_command(Zone::Before, Zone::Before), None);
        // Jumping clean across the window nets out to nothing.
        assert_eq!(toggle_command(Zone::Before, Zone::After), None);
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(zone_of(-0.01), Zone::Before);
        assert_eq!(zone_of(0.0), Zone::Inside);
        assert_eq!(zone_of(1.0), Zone::Inside);
        assert_eq!(zone_of(1.01), Zone::After);
    }

    #[test]
    fn test_scrub_converges() {
        let mut p = 0.0;
        for _ in 0..120 {
            p = scrub_step(p, 1.0, 1.0 / 60.0, 0.5);
        }
        assert!(scrub_settled(p, 1.0), "p = {}", p);
    }

    #[test]
    fn test_scrub_direct_when_zero() {
        assert_eq!(scrub_step(0.2, 0.9, 1.0 / 60.0, 0.0), 0.9);
    }

    #[test]
    fn test_scrub_moves_toward_target() {
        let p = scrub_step(0.0, 1.0, 1.0 / 60.0, 1.0);
        assert!(p > 0.0 && p < 1.0);
        // Heavier smoothing moves less per frame.
        let slower = scrub_step(0.0, 1.0, 1.0 / 60.0, 2.0);
        assert!(slower < p);
    }

    #[test]
    fn test_snap_targets() {
        // Four panels: stops at 0, 1/3, 2/3, 1.
        assert_eq!(snap_target(0.1, 4), 0.0);
        assert_eq!(snap_target(0.3, 4), 1.0 / 3.0);
        assert_eq!(snap_target(0.9, 4), 1.0);
        // Fewer than two stops leaves progress alone.
        assert_eq!(snap_target(0.42, 1), 0.42);
    }

    #[test]
    fn test_panel_progress_windows() {
        // Three panels. Panel 0 starts half-open (it is on screen at rest).
        assert_eq!(panel_progress(0.0, 0, 3), 0.5);
        // Panel 1 opens as the strip starts moving and is centered at
        // container progress 0.5.
        assert_eq!(panel_progress(0.0, 1, 3), 0.0);
        assert_eq!(panel_progress(0.5, 1, 3), 0.5);
        assert_eq!(panel_progress(1.0, 1, 3), 1.0);
        // The last panel is half-way through its window at full scroll.
        assert_eq!(panel_progress(1.0, 2, 3), 0.5);
    }

    #[test]
    fn test_panel_progress_single_panel() {
        assert_eq!(panel_progress(0.0, 0, 1), 1.0);
    }
}
