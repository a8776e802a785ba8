//! Carousel controller
//!
//! Owns one carousel's state and its surface. Every input handler is a total
//! function over the clamped state and ends in [`CarouselController::update`],
//! which is the only place the resting transform and control states are
//! written.

use crate::config::{CarouselConfig, StepMode};
use crate::error::BindError;
use crate::focus::{self, FocusContext, NavKey};
use crate::gap::detect_gap;
use crate::gesture::{SwipeGesture, SwipeIntent};
use crate::layout::Layout;
use crate::state::{CarouselState, Frame};
use crate::surface::{CarouselSurface, NavControl};

#[derive(Debug)]
pub struct CarouselController<S: CarouselSurface> {
    surface: S,
    config: CarouselConfig,
    state: CarouselState,
    laid_out: bool,
}

impl<S: CarouselSurface> CarouselController<S> {
    /// Attach to a surface. Detects the gap once; the first layout waits for
    /// [`recalc`](Self::recalc), normally called when card images settle.
    pub fn bind(surface: S, config: CarouselConfig) -> Result<Self, BindError> {
        let card_count = surface.card_count();
        if card_count == 0 {
            return Err(BindError::NoCards);
        }
        let gap = detect_gap(&surface, config.default_gap);
        log::debug!("carousel bound: {card_count} cards, gap {gap}px");
        Ok(Self {
            surface,
            config,
            state: CarouselState::new(card_count, gap),
            laid_out: false,
        })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Whether the initial layout has run. Hosts only arm resize handling
    /// after this turns true.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Re-measure the viewport, size every card, re-clamp the index and
    /// render.
    pub fn recalc(&mut self) -> Frame {
        let viewport_width = self.surface.viewport_width();
        let layout = Layout::compute(
            viewport_width,
            self.state.gap,
            self.state.card_count,
            &self.config.breakpoints,
        );
        self.surface.set_card_width(layout.applied_card_width());
        self.state.apply_layout(layout);
        self.laid_out = true;

        log::debug!(
            "carousel layout: viewport={viewport_width}px visible={} card_width={:.2}px max_index={} index={}",
            layout.visible_count,
            layout.card_width,
            layout.max_index,
            self.state.current_index
        );

        self.update()
    }

    /// Render the index-aligned transform and the nav control states. While
    /// a finger is down the live drag delta stays applied.
    pub fn update(&mut self) -> Frame {
        let swipe = &self.state.swipe;
        let drag = if swipe.is_active() { swipe.delta_x() } else { 0.0 };
        let offset = self.state.resting_offset() + drag;
        self.surface.set_track_offset(offset);
        self.surface
            .set_control_disabled(NavControl::Prev, !self.state.can_go_previous());
        self.surface
            .set_control_disabled(NavControl::Next, !self.state.can_go_next());
        self.state.frame(offset)
    }

    fn step(&self) -> usize {
        match self.config.step {
            StepMode::Card => 1,
            StepMode::Page => self.state.visible_count,
        }
    }

    /// Previous control. `None` when already at the first card.
    pub fn previous(&mut self) -> Option<Frame> {
        let step = self.step();
        if !self.state.step_previous(step) {
            log::trace!("previous ignored at index 0");
            return None;
        }
        Some(self.update())
    }

    /// Next control. `None` when already at `max_index`.
    pub fn next(&mut self) -> Option<Frame> {
        let step = self.step();
        if !self.state.step_next(step) {
            log::trace!("next ignored at max index {}", self.state.max_index);
            return None;
        }
        Some(self.update())
    }

    /// Route an arrow key to previous/next when the keyboard scope allows it.
    pub fn key_down(&mut self, key: NavKey, focus: FocusContext) -> Option<Frame> {
        if key == NavKey::Other {
            return None;
        }
        if !focus::accepts(self.config.keyboard.scope, focus) {
            log::trace!("{key:?} ignored under focus {focus:?}");
            return None;
        }
        match key {
            NavKey::ArrowLeft => self.previous(),
            NavKey::ArrowRight => self.next(),
            NavKey::Other => None,
        }
    }

    /// Finger down at `x`: anchor the drag and let the track follow directly.
    pub fn touch_start(&mut self, x: f32) {
        self.state.swipe.begin(x);
        self.surface.set_transition_suspended(true);
        log::trace!("swipe started at x={x}");
    }

    /// Finger moved to `x`: render the live, unaligned offset. Returns it, or
    /// `None` outside a gesture.
    pub fn touch_move(&mut self, x: f32) -> Option<f32> {
        let delta = self.state.swipe.track(x)?;
        let offset = self.state.resting_offset() + delta;
        self.surface.set_track_offset(offset);
        Some(offset)
    }

    /// Finger lifted: commit one card in the drag direction if it travelled
    /// far enough, then snap to the aligned offset either way.
    pub fn touch_end(&mut self) -> Frame {
        self.surface.set_transition_suspended(false);
        let delta = self.state.swipe.finish();
        match SwipeGesture::intent(delta, self.state.card_width, self.config.swipe_threshold) {
            Some(SwipeIntent::Advance) => {
                self.state.step_next(1);
            }
            Some(SwipeIntent::Retreat) => {
                self.state.step_previous(1);
            }
            None => {}
        }
        log::trace!("swipe ended: delta={delta} index={}", self.state.current_index);
        self.update()
    }

    /// Gesture interrupted by the platform: snap back without committing.
    pub fn touch_cancel(&mut self) -> Frame {
        self.surface.set_transition_suspended(false);
        let delta = self.state.swipe.finish();
        log::trace!("swipe cancelled: delta={delta}");
        self.update()
    }
}
