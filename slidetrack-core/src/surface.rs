//! Host surface contract
//!
//! A surface is whatever holds the carousel's page structure: a viewport
//! that clips, a track that moves, the cards inside it and the two nav
//! controls. The controller only reads layout metrics and writes visual
//! state through this trait, so the same logic drives a DOM, a native
//! toolkit, or a recording double in tests.

use crate::error::SurfaceError;

/// One of the two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavControl {
    Prev,
    Next,
}

#[cfg_attr(test, mockall::automock)]
pub trait CarouselSurface {
    /// Current width of the clipping viewport, in pixels.
    fn viewport_width(&self) -> f32;

    fn card_count(&self) -> usize;

    /// Computed value of a style property on the track, e.g. `gap`.
    fn track_style(&self, property: &str) -> Result<String, SurfaceError>;

    /// Apply a uniform width to every card.
    fn set_card_width(&mut self, px: u32);

    /// Move the track horizontally; negative values reveal later cards.
    fn set_track_offset(&mut self, px: f32);

    /// Suspend (`true`) or restore (`false`) the track's transition so a
    /// dragged track follows the finger directly.
    fn set_transition_suspended(&mut self, suspended: bool);

    fn set_control_disabled(&mut self, control: NavControl, disabled: bool);
}
