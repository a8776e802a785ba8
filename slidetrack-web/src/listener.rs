//! Event listener handles that detach on drop

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListenOptions {
    /// Promise never to call `preventDefault`, so scrolling stays smooth.
    pub passive: bool,
    pub once: bool,
}

/// A registered DOM listener. Dropping it removes the listener.
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl EventListener {
    pub fn new<F>(
        target: &EventTarget,
        kind: &'static str,
        options: ListenOptions,
        handler: F,
    ) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let opts = AddEventListenerOptions::new();
        opts.set_passive(options.passive);
        opts.set_once(options.once);
        if let Err(err) = target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
        {
            log::warn!("failed to add {kind} listener: {err:?}");
        }
        Self {
            target: target.clone(),
            kind,
            callback,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        // Removing a listener that already fired with `once` is a no-op.
        let _ = self
            .target
            .remove_event_listener_with_callback(
                self.kind,
                self.callback.as_ref().unchecked_ref(),
            );
    }
}
