//! CarouselState: index + geometry for one carousel instance

use serde::Serialize;

use crate::gesture::SwipeGesture;
use crate::layout::Layout;

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub card_count: usize,
    /// Spacing between cards, fixed for the session.
    pub gap: f32,

    // Derived on each layout pass
    pub visible_count: usize,
    pub card_width: f32,
    pub max_index: usize,

    /// Leftmost visible card. Always within `0..=max_index`.
    pub current_index: usize,
    pub swipe: SwipeGesture,
}

impl CarouselState {
    /// Fresh state before any layout: zero card width and a zero max index,
    /// so navigation has nowhere to go until the first pass runs.
    pub fn new(card_count: usize, gap: f32) -> Self {
        Self {
            card_count,
            gap,
            visible_count: 1,
            card_width: 0.0,
            max_index: 0,
            current_index: 0,
            swipe: SwipeGesture::new(),
        }
    }

    /// Adopt new geometry. The index only ever moves down, to stay within
    /// the new bound.
    pub fn apply_layout(&mut self, layout: Layout) {
        self.visible_count = layout.visible_count;
        self.card_width = layout.card_width;
        self.max_index = layout.max_index;
        self.current_index = self.current_index.min(self.max_index);
    }

    /// Distance from one card's leading edge to the next.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Track offset aligned to `current_index`.
    #[inline]
    pub fn resting_offset(&self) -> f32 {
        -(self.current_index as f32 * self.stride())
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index
    }

    /// Move back by `step`, floored at 0. Returns false when already at 0.
    pub fn step_previous(&mut self, step: usize) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_index = self.current_index.saturating_sub(step.max(1));
        true
    }

    /// Move forward by `step`, capped at `max_index`. Returns false when
    /// already at the end.
    pub fn step_next(&mut self, step: usize) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_index = self
            .current_index
            .saturating_add(step.max(1))
            .min(self.max_index);
        true
    }

    pub fn frame(&self, offset: f32) -> Frame {
        Frame {
            offset,
            current_index: self.current_index,
            max_index: self.max_index,
            visible_count: self.visible_count,
            card_width: self.card_width,
            prev_disabled: !self.can_go_previous(),
            next_disabled: !self.can_go_next(),
            swiping: self.swipe.is_active(),
        }
    }
}

/// What one render pushed to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub offset: f32,
    pub current_index: usize,
    pub max_index: usize,
    pub visible_count: usize,
    pub card_width: f32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub swiping: bool,
}
