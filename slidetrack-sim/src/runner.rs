//! Scenario replay
//!
//! One [`Simulation`] per scenario. Every script event yields one
//! [`Record`]; a debounced relayout that lands between events yields its own
//! record with no step number.

use serde::Serialize;
use slidetrack_core::testing::RecordingSurface;
use slidetrack_core::{
    BindError, CarouselConfig, CarouselController, Debouncer, Frame, GateStatus, ImageGate,
    NavKey,
};
use tokio::sync::mpsc;

use crate::scenario::{Scenario, ScriptEvent};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A full render.
    Rendered { frame: Frame },
    /// A live drag offset written outside a render.
    Dragged { offset: f32 },
    /// A relayout was scheduled behind the resize debounce.
    Scheduled,
    /// Nothing happened.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// 1-based position in the script, `None` for timer-driven relayouts.
    pub step: Option<usize>,
    pub cause: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug)]
pub struct Simulation {
    controller: CarouselController<RecordingSurface>,
    gate: ImageGate,
    debouncer: Debouncer,
    relayout_tx: mpsc::UnboundedSender<()>,
    relayout_rx: mpsc::UnboundedReceiver<()>,
    records: Vec<Record>,
}

impl Simulation {
    pub fn new(scenario: &Scenario, config: CarouselConfig) -> Result<Self, BindError> {
        let mut surface = RecordingSurface::new(scenario.viewport_width, scenario.cards);
        if let Some(gap) = &scenario.gap {
            surface = surface.with_style("gap", gap);
        }
        let debouncer = Debouncer::new(config.resize_debounce());
        let controller = CarouselController::bind(surface, config)?;
        let gate = ImageGate::new(std::iter::repeat_n(false, scenario.images_pending));
        let (relayout_tx, relayout_rx) = mpsc::unbounded_channel();

        let mut sim = Self {
            controller,
            gate,
            debouncer,
            relayout_tx,
            relayout_rx,
            records: Vec::new(),
        };
        if sim.gate.open_if_clear() {
            let frame = sim.controller.recalc();
            sim.push(None, "initial layout", Outcome::Rendered { frame });
        }
        Ok(sim)
    }

    pub fn controller(&self) -> &CarouselController<RecordingSurface> {
        &self.controller
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replay every event, then let a pending relayout land.
    pub async fn run(mut self, events: &[ScriptEvent]) -> Vec<Record> {
        for (i, event) in events.iter().enumerate() {
            self.apply(i + 1, event).await;
        }
        self.settle().await;
        self.records
    }

    pub async fn apply(&mut self, step: usize, event: &ScriptEvent) {
        self.drain_relayouts();
        let c = &mut self.controller;
        let outcome = match event {
            ScriptEvent::Next => rendered(c.next()),
            ScriptEvent::Previous => rendered(c.previous()),
            ScriptEvent::Key { key, focus } => {
                rendered(c.key_down(NavKey::from_key(key), (*focus).into()))
            }
            ScriptEvent::TouchStart { x } => {
                c.touch_start(*x);
                Outcome::Ignored
            }
            ScriptEvent::TouchMove { x } => match c.touch_move(*x) {
                Some(offset) => Outcome::Dragged { offset },
                None => Outcome::Ignored,
            },
            ScriptEvent::TouchEnd => Outcome::Rendered {
                frame: c.touch_end(),
            },
            ScriptEvent::TouchCancel => Outcome::Rendered {
                frame: c.touch_cancel(),
            },
            ScriptEvent::ImageLoaded | ScriptEvent::ImageFailed => match self.gate.settle() {
                GateStatus::Opened => Outcome::Rendered { frame: c.recalc() },
                GateStatus::Pending(_) | GateStatus::AlreadyOpen => Outcome::Ignored,
            },
            ScriptEvent::Resize { width } => {
                c.surface_mut().viewport_width = *width;
                if c.is_laid_out() {
                    let tx = self.relayout_tx.clone();
                    self.debouncer.schedule(move || {
                        let _ = tx.send(());
                    });
                    Outcome::Scheduled
                } else {
                    tracing::debug!("resize before first layout ignored");
                    Outcome::Ignored
                }
            }
            ScriptEvent::Wait { ms } => {
                tokio::time::sleep(std::time::Duration::from_millis(*ms)).await;
                // Let a timer due at the same instant run first.
                tokio::task::yield_now().await;
                Outcome::Ignored
            }
        };
        self.push(Some(step), event.to_string(), outcome);
        self.drain_relayouts();
    }

    /// Wait out a pending debounce so its relayout is recorded.
    pub async fn settle(&mut self) {
        if self.debouncer.is_pending() && self.relayout_rx.recv().await.is_some() {
            self.relayout();
        }
        self.drain_relayouts();
    }

    fn drain_relayouts(&mut self) {
        while self.relayout_rx.try_recv().is_ok() {
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let frame = self.controller.recalc();
        self.push(None, "relayout", Outcome::Rendered { frame });
    }

    fn push(&mut self, step: Option<usize>, cause: impl Into<String>, outcome: Outcome) {
        let record = Record {
            step,
            cause: cause.into(),
            outcome,
        };
        tracing::trace!(?record, "carousel event");
        self.records.push(record);
    }
}

fn rendered(frame: Option<Frame>) -> Outcome {
    frame.map_or(Outcome::Ignored, |frame| Outcome::Rendered { frame })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(width: f32, cards: usize, images_pending: usize) -> Scenario {
        Scenario {
            viewport_width: width,
            cards,
            gap: Some("20px".into()),
            images_pending,
            events: Vec::new(),
        }
    }

    fn frames(records: &[Record]) -> Vec<&Frame> {
        records
            .iter()
            .filter_map(|r| match &r.outcome {
                Outcome::Rendered { frame } => Some(frame),
                _ => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn lays_out_immediately_without_pending_images() {
        let sim = Simulation::new(&scenario(1200.0, 6, 0), CarouselConfig::default()).unwrap();
        assert_eq!(sim.records().len(), 1);
        assert_eq!(sim.records()[0].cause, "initial layout");
        assert!(sim.controller().is_laid_out());
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_every_image() {
        let sim = Simulation::new(&scenario(1200.0, 6, 2), CarouselConfig::default()).unwrap();
        let records = sim
            .run(&[ScriptEvent::Next, ScriptEvent::ImageLoaded, ScriptEvent::ImageLoaded])
            .await;

        assert_eq!(records[0].outcome, Outcome::Ignored, "no layout yet");
        assert_eq!(records[1].outcome, Outcome::Ignored);
        let Outcome::Rendered { frame } = &records[2].outcome else {
            panic!("second image should open the gate: {records:?}");
        };
        assert_eq!(frame.max_index, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_image_still_opens_the_gate() {
        let sim = Simulation::new(&scenario(1200.0, 6, 2), CarouselConfig::default()).unwrap();
        let records = sim
            .run(&[ScriptEvent::ImageFailed, ScriptEvent::ImageLoaded])
            .await;

        assert_eq!(records[0].cause, "image_failed");
        assert_eq!(records[0].outcome, Outcome::Ignored);
        assert!(matches!(records[1].outcome, Outcome::Rendered { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn resize_burst_relayouts_once() {
        let sim = Simulation::new(&scenario(1200.0, 6, 0), CarouselConfig::default()).unwrap();
        let mut events = Vec::new();
        for width in [1100.0, 1000.0, 900.0, 800.0, 650.0] {
            events.push(ScriptEvent::Resize { width });
            events.push(ScriptEvent::Wait { ms: 10 });
        }
        let records = sim.run(&events).await;

        let relayouts: Vec<_> = records.iter().filter(|r| r.cause == "relayout").collect();
        assert_eq!(relayouts.len(), 1);
        let Outcome::Rendered { frame } = &relayouts[0].outcome else {
            panic!("relayout renders");
        };
        assert_eq!(frame.visible_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn resize_before_layout_is_ignored() {
        let sim = Simulation::new(&scenario(1200.0, 6, 1), CarouselConfig::default()).unwrap();
        let records = sim
            .run(&[
                ScriptEvent::Resize { width: 500.0 },
                ScriptEvent::Wait { ms: 200 },
                ScriptEvent::ImageLoaded,
            ])
            .await;

        assert_eq!(records[0].outcome, Outcome::Ignored);
        assert!(records.iter().all(|r| r.cause != "relayout"));
        // The initial layout still measures the resized viewport.
        assert_eq!(frames(&records)[0].visible_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn swipe_records_drag_then_commit() {
        let sim = Simulation::new(&scenario(100.0, 4, 0), CarouselConfig::default()).unwrap();
        let records = sim
            .run(&[
                ScriptEvent::TouchStart { x: 300.0 },
                ScriptEvent::TouchMove { x: 260.0 },
                ScriptEvent::TouchEnd,
            ])
            .await;

        assert_eq!(records[2].outcome, Outcome::Dragged { offset: -40.0 });
        let Outcome::Rendered { frame } = &records[3].outcome else {
            panic!("touch end renders");
        };
        assert_eq!(frame.current_index, 1);
    }

    #[test]
    fn empty_track_does_not_bind() {
        let result = Simulation::new(&scenario(1200.0, 0, 0), CarouselConfig::default());
        assert!(matches!(result, Err(BindError::NoCards)));
    }
}
