//! Wiring between DOM events and the carousel controller

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use slidetrack_core::{
    BindError, CarouselConfig, CarouselController, GateStatus, ImageGate, NavControl,
    NavKey,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlImageElement, KeyboardEvent, TouchEvent, Window,
};

use crate::dom::DomSurface;
use crate::listener::{EventListener, ListenOptions};

type SharedController = Rc<RefCell<CarouselController<DomSurface>>>;
type Listeners = Rc<RefCell<Vec<EventListener>>>;

/// Run `f` against the controller unless another handler is mid-flight.
fn with_controller<R>(
    controller: &SharedController,
    f: impl FnOnce(&mut CarouselController<DomSurface>) -> R,
) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut c) => Some(f(&mut c)),
        Err(_) => {
            log::warn!("carousel busy, event dropped");
            None
        }
    }
}

fn first_touch_x(event: &Event) -> Option<f32> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_x() as f32)
}

/// A carousel bound to the page. Dropping it detaches every listener and
/// cancels a pending relayout.
#[derive(Debug)]
pub struct MountedCarousel {
    controller: SharedController,
    listeners: Listeners,
    resize_timer: Rc<RefCell<Option<Timeout>>>,
}

impl MountedCarousel {
    pub fn mount(
        window: Window,
        document: Document,
        config: CarouselConfig,
    ) -> Result<Self, BindError> {
        let surface = DomSurface::locate(window.clone(), &document, &config.selectors)?;
        let image_selector = config.selectors.image.clone();
        let controller = CarouselController::bind(surface, config)?;

        let images = controller.surface().images(&image_selector);
        let viewport: EventTarget = controller.surface().viewport().clone().into();
        let prev: EventTarget = controller.surface().control(NavControl::Prev).clone().into();
        let next: EventTarget = controller.surface().control(NavControl::Next).clone().into();

        let mounted = Self {
            controller: Rc::new(RefCell::new(controller)),
            listeners: Rc::new(RefCell::new(Vec::new())),
            resize_timer: Rc::new(RefCell::new(None)),
        };

        mounted.attach_controls(&prev, &next);
        mounted.attach_keyboard(&document);
        mounted.attach_swipe(&viewport);
        mounted.await_images(images, window);

        log::debug!(
            "carousel mounted with {} cards",
            mounted.controller.borrow().state().card_count
        );
        Ok(mounted)
    }

    /// Run `f` against the controller. `None` while an event handler holds
    /// it.
    pub fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut CarouselController<DomSurface>) -> R,
    ) -> Option<R> {
        with_controller(&self.controller, f)
    }

    fn listen<F>(&self, target: &EventTarget, kind: &'static str, options: ListenOptions, f: F)
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners
            .borrow_mut()
            .push(EventListener::new(target, kind, options, f));
    }

    fn attach_controls(&self, prev: &EventTarget, next: &EventTarget) {
        let c = self.controller.clone();
        self.listen(prev, "click", ListenOptions::default(), move |_| {
            with_controller(&c, |c| c.previous());
        });
        let c = self.controller.clone();
        self.listen(next, "click", ListenOptions::default(), move |_| {
            with_controller(&c, |c| c.next());
        });
    }

    fn attach_keyboard(&self, document: &Document) {
        let c = self.controller.clone();
        let doc = document.clone();
        self.listen(document, "keydown", ListenOptions::default(), move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = NavKey::from_key(&event.key());
            if key == NavKey::Other {
                return;
            }
            with_controller(&c, |c| {
                let focus = c.surface().focus_context(&doc);
                c.key_down(key, focus)
            });
        });
    }

    fn attach_swipe(&self, viewport: &EventTarget) {
        let passive = ListenOptions {
            passive: true,
            ..ListenOptions::default()
        };

        let c = self.controller.clone();
        self.listen(viewport, "touchstart", passive, move |event| {
            if let Some(x) = first_touch_x(&event) {
                with_controller(&c, |c| c.touch_start(x));
            }
        });
        let c = self.controller.clone();
        self.listen(viewport, "touchmove", passive, move |event| {
            if let Some(x) = first_touch_x(&event) {
                with_controller(&c, |c| c.touch_move(x));
            }
        });
        let c = self.controller.clone();
        self.listen(viewport, "touchend", ListenOptions::default(), move |_| {
            with_controller(&c, |c| c.touch_end());
        });
        let c = self.controller.clone();
        self.listen(viewport, "touchcancel", ListenOptions::default(), move |_| {
            with_controller(&c, |c| c.touch_cancel());
        });
    }

    /// Lay out once every card image has loaded or failed, then start
    /// listening for resizes.
    fn await_images(&self, images: Vec<HtmlImageElement>, window: Window) {
        let gate = Rc::new(RefCell::new(ImageGate::new(
            images.iter().map(HtmlImageElement::complete),
        )));

        let ready = {
            let controller = self.controller.clone();
            let listeners = Rc::downgrade(&self.listeners);
            let timer = self.resize_timer.clone();
            Rc::new(move || on_ready(&controller, &listeners, &timer, &window))
        };

        if gate.borrow_mut().open_if_clear() {
            ready();
            return;
        }

        let once = ListenOptions {
            once: true,
            ..ListenOptions::default()
        };
        for image in images.into_iter().filter(|img| !img.complete()) {
            let target: EventTarget = image.into();
            for kind in ["load", "error"] {
                let gate = gate.clone();
                let ready = ready.clone();
                self.listen(&target, kind, once, move |_| {
                    let status = gate.borrow_mut().settle();
                    match status {
                        GateStatus::Opened => ready(),
                        GateStatus::Pending(left) => {
                            log::trace!("card image settled, {left} pending")
                        }
                        GateStatus::AlreadyOpen => {}
                    }
                });
            }
        }
    }

    pub fn unmount(&self) {
        self.resize_timer.borrow_mut().take();
        self.listeners.borrow_mut().clear();
    }
}

impl Drop for MountedCarousel {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn on_ready(
    controller: &SharedController,
    listeners: &Weak<RefCell<Vec<EventListener>>>,
    timer: &Rc<RefCell<Option<Timeout>>>,
    window: &Window,
) {
    let Some(delay_ms) = with_controller(controller, |c| {
        c.recalc();
        c.config().resize_debounce_ms
    }) else {
        return;
    };
    let Some(listeners) = listeners.upgrade() else {
        // Unmounted while images were loading.
        return;
    };

    let delay_ms = u32::try_from(delay_ms).unwrap_or(u32::MAX);
    let c = controller.clone();
    let timer = timer.clone();
    let resize = EventListener::new(window, "resize", ListenOptions::default(), move |_| {
        let c = c.clone();
        // Replacing the slot drops, and so cancels, the pending timeout.
        *timer.borrow_mut() = Some(Timeout::new(delay_ms, move || {
            with_controller(&c, |c| c.recalc());
        }));
    });
    listeners.borrow_mut().push(resize);
}
