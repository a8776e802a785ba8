//! Keyboard routing
//!
//! Decides whether an arrow key reaches the carousel, given where focus sits
//! when the key goes down.

use crate::config::KeyboardScope;

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Where keyboard focus was when a key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusContext {
    /// Nothing in particular (document body).
    #[default]
    Document,
    /// The carousel viewport, one of its cards, or a nav control.
    Carousel,
    /// A text field, textarea, select or contenteditable outside the carousel.
    EditableControl,
    /// Any other focusable element outside the carousel.
    OtherControl,
}

/// Whether `scope` lets a key pressed under `focus` drive the carousel.
pub fn accepts(scope: KeyboardScope, focus: FocusContext) -> bool {
    match scope {
        KeyboardScope::Document => focus != FocusContext::EditableControl,
        KeyboardScope::Carousel => focus == FocusContext::Carousel,
    }
}
