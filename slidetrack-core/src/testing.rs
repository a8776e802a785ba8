//! Recording surface for tests and headless hosts
//!
//! Holds the page metrics a real surface would measure and keeps the last
//! value written for every visual property, plus a call log.

use std::collections::HashMap;

use crate::error::SurfaceError;
use crate::surface::{CarouselSurface, NavControl};

/// One write the controller made to the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    CardWidth(u32),
    TrackOffset(f32),
    TransitionSuspended(bool),
    ControlDisabled(NavControl, bool),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub viewport_width: f32,
    pub card_count: usize,
    /// Computed style values by property name; missing properties read as
    /// unavailable.
    pub styles: HashMap<String, String>,

    pub card_width: Option<u32>,
    pub track_offset: Option<f32>,
    pub transition_suspended: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new(viewport_width: f32, card_count: usize) -> Self {
        Self {
            viewport_width,
            card_count,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(property.to_string(), value.to_string());
        self
    }

    /// Number of full renders (one per previous-control write).
    pub fn render_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::ControlDisabled(NavControl::Prev, _)))
            .count()
    }

    /// Number of card-width passes, one per layout.
    pub fn layout_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::CardWidth(_)))
            .count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl CarouselSurface for RecordingSurface {
    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn card_count(&self) -> usize {
        self.card_count
    }

    fn track_style(&self, property: &str) -> Result<String, SurfaceError> {
        self.styles
            .get(property)
            .cloned()
            .ok_or_else(|| SurfaceError::StyleUnavailable(property.to_string()))
    }

    fn set_card_width(&mut self, px: u32) {
        self.card_width = Some(px);
        self.calls.push(SurfaceCall::CardWidth(px));
    }

    fn set_track_offset(&mut self, px: f32) {
        self.track_offset = Some(px);
        self.calls.push(SurfaceCall::TrackOffset(px));
    }

    fn set_transition_suspended(&mut self, suspended: bool) {
        self.transition_suspended = suspended;
        self.calls.push(SurfaceCall::TransitionSuspended(suspended));
    }

    fn set_control_disabled(&mut self, control: NavControl, disabled: bool) {
        match control {
            NavControl::Prev => self.prev_disabled = disabled,
            NavControl::Next => self.next_disabled = disabled,
        }
        self.calls.push(SurfaceCall::ControlDisabled(control, disabled));
    }
}
