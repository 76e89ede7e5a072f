//! Carousel Paging
//!
//! Page math for the horizontal project carousel: how many cards fit a
//! panel, which cards a panel shows, and how swipes move between panels.

/// Viewport width below which panels hold a single card.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Minimum horizontal swipe distance in px that changes panels.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Cards per panel for a given viewport width.
pub fn cards_per_page(viewport_width: f64) -> usize {
    if viewport_width < MOBILE_BREAKPOINT {
        1
    } else {
        2
    }
}

/// Number of panels needed for `count` cards.
pub fn page_count(count: usize, per_page: usize) -> usize {
    if count == 0 || per_page == 0 {
        return 0;
    }
    (count + per_page - 1) / per_page
}

/// Card index range shown on `page`.
pub fn page_slice(count: usize, per_page: usize, page: usize) -> std::ops::Range<usize> {
    let start = (page * per_page).min(count);
    let end = (start + per_page).min(count);
    start..end
}

/// Clamp a requested page to the valid range.
pub fn clamp_page(page: isize, pages: usize) -> usize {
    if pages == 0 {
        return 0;
    }
    page.clamp(0, pages as isize - 1) as usize
}

/// Panel after a horizontal swipe of `delta_x` (touch end minus start).
/// Short swipes stay put; a left swipe advances, a right swipe goes back.
pub fn swipe_step(page: usize, pages: usize, delta_x: f64) -> usize {
    if delta_x.abs() < SWIPE_THRESHOLD {
        return page;
    }
    let next = if delta_x < 0.0 {
        page as isize + 1
    } else {
        page as isize - 1
    };
    clamp_page(next, pages)
}

/// Scroll progress that lands exactly on `page`; panels are evenly
/// spaced stops across the pinned range.
pub fn page_progress(page: usize, pages: usize) -> f64 {
    if pages < 2 {
        return 0.0;
    }
    page as f64 / (pages - 1) as f64
}

/// Panel nearest to a scroll progress.
pub fn page_at_progress(progress: f64, pages: usize) -> usize {
    if pages < 2 {
        return 0;
    }
    (progress.clamp(0.0, 1.0) * (pages - 1) as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_per_page_breakpoint() {
        assert_eq!(cards_per_page(375.0), 1);
        assert_eq!(cards_per_page(767.9), 1);
        assert_eq!(cards_per_page(768.0), 2);
        assert_eq!(cards_per_page(1440.0), 2);
    }

    #[test]
    fn test_page_count_rounds_up() {
        // 5 cards: one per panel on mobile, pairs on desktop
        assert_eq!(page_count(5, 1), 5);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(4, 2), 2);
        assert_eq!(page_count(0, 2), 0);
    }

    #[test]
    fn test_page_slice_partial_last_page() {
        assert_eq!(page_slice(5, 2, 0), 0..2);
        assert_eq!(page_slice(5, 2, 2), 4..5);
        assert_eq!(page_slice(5, 2, 9), 5..5);
    }

    #[test]
    fn test_short_swipe_stays_put() {
        assert_eq!(swipe_step(1, 3, -30.0), 1);
        assert_eq!(swipe_step(1, 3, 30.0), 1);
    }

    #[test]
    fn test_swipe_moves_one_panel() {
        assert_eq!(swipe_step(0, 3, -60.0), 1);
        assert_eq!(swipe_step(1, 3, 60.0), 0);
    }

    #[test]
    fn test_swipe_clamps_at_ends() {
        assert_eq!(swipe_step(0, 3, 60.0), 0);
        assert_eq!(swipe_step(2, 3, -60.0), 2);
    }

    #[test]
    fn test_page_progress_round_trip() {
        assert_eq!(page_at_progress(0.0, 3), 0);
        assert_eq!(page_at_progress(0.5, 3), 1);
        assert_eq!(page_at_progress(1.0, 3), 2);
        assert!((page_progress(1, 3) - 0.5).abs() < 1e-9);
        assert_eq!(page_progress(0, 1), 0.0);
    }
}
