//! Touch swipe tracking

/// Which way a released swipe asks the track to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Finger travelled left: reveal the next card.
    Advance,
    /// Finger travelled right: reveal the previous card.
    Retreat,
}

/// Live state of a single-finger horizontal drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeGesture {
    start_x: f32,
    delta_x: f32,
    active: bool,
}

impl SwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn delta_x(&self) -> f32 {
        self.delta_x
    }

    /// Start tracking from `x`. A second start while active re-anchors.
    pub fn begin(&mut self, x: f32) {
        self.start_x = x;
        self.delta_x = 0.0;
        self.active = true;
    }

    /// Record the finger at `x`; returns the drag delta, or `None` when no
    /// gesture is in progress.
    pub fn track(&mut self, x: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.delta_x = x - self.start_x;
        Some(self.delta_x)
    }

    /// End the gesture and return the final delta. Always leaves the tracker
    /// inactive with a zero delta.
    pub fn finish(&mut self) -> f32 {
        let delta = self.delta_x;
        self.delta_x = 0.0;
        self.active = false;
        delta
    }

    /// Interpret a released delta. Travel must exceed `threshold × card_width`
    /// to count.
    pub fn intent(delta_x: f32, card_width: f32, threshold: f32) -> Option<SwipeIntent> {
        if delta_x.abs() <= card_width * threshold {
            return None;
        }
        if delta_x < 0.0 {
            Some(SwipeIntent::Advance)
        } else {
            Some(SwipeIntent::Retreat)
        }
    }
}
