//! Responsive layout arithmetic
//!
//! Pure functions from viewport metrics to card geometry. The controller
//! feeds their output into [`CarouselState`](crate::CarouselState).

use serde::Serialize;

use crate::config::Breakpoints;
use crate::constants::breakpoints::MAX_VISIBLE;

/// Number of cards shown side by side at `viewport_width`.
///
/// Ties at a threshold resolve to the smaller count.
pub fn visible_count(viewport_width: f32, breakpoints: &Breakpoints) -> usize {
    if viewport_width <= breakpoints.single_max {
        1
    } else if viewport_width <= breakpoints.double_max {
        2
    } else {
        MAX_VISIBLE
    }
}

/// Geometry derived from one measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub visible_count: usize,
    /// Exact card width; the surface receives [`Layout::applied_card_width`].
    pub card_width: f32,
    pub max_index: usize,
}

impl Layout {
    pub fn compute(
        viewport_width: f32,
        gap: f32,
        card_count: usize,
        breakpoints: &Breakpoints,
    ) -> Self {
        let visible = visible_count(viewport_width, breakpoints);
        let gaps = gap * (visible - 1) as f32;
        let card_width = ((viewport_width - gaps) / visible as f32).max(0.0);
        Self {
            visible_count: visible,
            card_width,
            max_index: card_count.saturating_sub(visible),
        }
    }

    /// Card width rounded to a whole pixel, halves rounding up.
    pub fn applied_card_width(&self) -> u32 {
        (self.card_width + 0.5).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp() -> Breakpoints {
        Breakpoints::default()
    }

    #[test]
    fn breakpoints_resolve_ties_to_smaller_count() {
        assert_eq!(visible_count(0.0, &bp()), 1);
        assert_eq!(visible_count(600.0, &bp()), 1);
        assert_eq!(visible_count(600.5, &bp()), 2);
        assert_eq!(visible_count(650.0, &bp()), 2);
        assert_eq!(visible_count(900.0, &bp()), 2);
        assert_eq!(visible_count(901.0, &bp()), 3);
        assert_eq!(visible_count(4000.0, &bp()), 3);
    }

    #[test]
    fn visible_count_is_monotonic_in_width() {
        let mut previous = visible_count(0.0, &bp());
        for w in (0..=2000).map(|w| w as f32) {
            let current = visible_count(w, &bp());
            assert!((1..=3).contains(&current));
            assert!(current >= previous, "count dropped at width {w}");
            previous = current;
        }
    }

    #[test]
    fn card_width_fills_viewport_exactly() {
        for (width, gap) in [(1200.0, 20.0), (800.0, 16.0), (500.0, 20.0), (1000.0, 0.0)] {
            let layout = Layout::compute(width, gap, 6, &bp());
            let n = layout.visible_count as f32;
            let filled = layout.card_width * n + gap * (n - 1.0);
            assert!((filled - width).abs() < 1e-3, "{width}/{gap}: {filled}");
        }
    }

    #[test]
    fn max_index_never_negative() {
        let layout = Layout::compute(1200.0, 20.0, 2, &bp());
        assert_eq!(layout.visible_count, 3);
        assert_eq!(layout.max_index, 0);

        let layout = Layout::compute(1200.0, 20.0, 0, &bp());
        assert_eq!(layout.max_index, 0);

        let layout = Layout::compute(1200.0, 20.0, 6, &bp());
        assert_eq!(layout.max_index, 3);
    }

    #[test]
    fn applied_width_rounds_half_up() {
        // (1000 - 40) / 3 = 320.0
        assert_eq!(Layout::compute(1000.0, 20.0, 6, &bp()).applied_card_width(), 320);
        // (901 - 40) / 3 = 287.0
        assert_eq!(Layout::compute(901.0, 20.0, 6, &bp()).applied_card_width(), 287);
        // (701 - 20) / 2 = 340.5
        assert_eq!(Layout::compute(701.0, 20.0, 6, &bp()).applied_card_width(), 341);
        // (905 - 40) / 3 = 288.33
        assert_eq!(Layout::compute(905.0, 20.0, 6, &bp()).applied_card_width(), 288);
    }

    #[test]
    fn zero_width_viewport_yields_zero_card_width() {
        let layout = Layout::compute(0.0, 20.0, 4, &bp());
        assert_eq!(layout.visible_count, 1);
        assert_eq!(layout.card_width, 0.0);
        assert_eq!(layout.applied_card_width(), 0);
        assert_eq!(layout.max_index, 3);
    }
}
