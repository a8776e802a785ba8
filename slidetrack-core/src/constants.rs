//! Carousel constants
//!
//! Compiled defaults for layout, gesture and relayout behavior. Every value
//! here can be overridden through [`CarouselConfig`](crate::CarouselConfig);
//! the config accessors fall back to these.

/// Responsive breakpoints, in viewport pixels.
pub mod breakpoints {
    /// Widths at or below this show a single card.
    pub const SINGLE_MAX: f32 = 600.0;
    /// Widths at or below this (and above `SINGLE_MAX`) show two cards.
    pub const DOUBLE_MAX: f32 = 900.0;
    /// Card count shown above `DOUBLE_MAX`.
    pub const MAX_VISIBLE: usize = 3;
}

/// Track spacing defaults.
pub mod gap {
    /// Inter-card spacing used when the track style cannot be read.
    pub const DEFAULT_PX: f32 = 20.0;
    /// Style property consulted first.
    pub const PROPERTY: &str = "gap";
    /// Style property consulted when `gap` is empty.
    pub const FALLBACK_PROPERTY: &str = "column-gap";
}

/// Touch swipe defaults.
pub mod swipe {
    /// Fraction of a card width the finger must travel to commit a step.
    pub const COMMIT_FRACTION: f32 = 0.25;
}

/// Resize relayout defaults.
pub mod resize {
    /// Quiet period after the last resize event before relayout runs (ms).
    pub const DEBOUNCE_MS: u64 = 90;
}

/// Default selectors for the page structure the browser binding attaches to.
#[allow(missing_docs)]
pub mod selectors {
    pub const TRACK: &str = ".cards";
    pub const VIEWPORT: &str = ".cards-wrapper";
    pub const PREV: &str = ".arrow.left";
    pub const NEXT: &str = ".arrow.right";
    pub const CARD: &str = ".card";
    pub const IMAGE: &str = "img";
}
