//! Browser binding for the slidetrack carousel.
//!
//! [`DomSurface`] implements the controller's surface over `web-sys`, and
//! [`MountedCarousel`] wires page events to it. JavaScript either constructs a
//! [`Carousel`] explicitly or, with the `autostart` feature, gets one mounted
//! with default selectors when the document is ready.
#![allow(missing_docs)]

pub mod dom;
pub mod listener;
pub mod mount;

use slidetrack_core::CarouselConfig;
use wasm_bindgen::prelude::*;

pub use dom::DomSurface;
pub use listener::{EventListener, ListenOptions};
pub use mount::MountedCarousel;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    #[cfg(feature = "autostart")]
    autostart::arm();
}

/// Mount against the current page. A page without the carousel structure
/// is left alone.
fn mount_on_page(config: CarouselConfig) -> Option<MountedCarousel> {
    let window = web_sys::window()?;
    let document = window.document()?;
    match MountedCarousel::mount(window, document, config) {
        Ok(mounted) => Some(mounted),
        Err(err) => {
            log::debug!("carousel not mounted: {err}");
            None
        }
    }
}

fn parse_config(json: Option<String>) -> Result<CarouselConfig, JsValue> {
    let config = match json.as_deref() {
        None | Some("") => CarouselConfig::default(),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| js_sys::Error::new(&format!("invalid carousel config: {e}")))?,
    };
    config
        .validate()
        .map_err(|e| js_sys::Error::new(&e.to_string()))?;
    Ok(config)
}

/// Handle exported to JavaScript.
///
/// `new Carousel(json?)` rejects malformed or invalid configuration. A page
/// without the carousel structure yields an inert handle whose methods do
/// nothing.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Carousel {
    mounted: Option<MountedCarousel>,
}

impl Carousel {
    fn with<R>(
        &self,
        f: impl FnOnce(&mut slidetrack_core::CarouselController<DomSurface>) -> R,
    ) -> Option<R> {
        self.mounted.as_ref()?.with_controller(f)
    }
}

#[wasm_bindgen]
impl Carousel {
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<Carousel, JsValue> {
        let config = parse_config(config)?;
        Ok(Self {
            mounted: mount_on_page(config),
        })
    }

    /// Returns whether the track moved.
    pub fn next(&self) -> bool {
        self.with(|c| c.next().is_some()).unwrap_or(false)
    }

    /// Returns whether the track moved.
    pub fn previous(&self) -> bool {
        self.with(|c| c.previous().is_some()).unwrap_or(false)
    }

    /// Lay out immediately, e.g. after cards were restyled.
    pub fn recalc(&self) {
        self.with(|c| c.recalc());
    }

    /// Detach every listener. The handle is inert afterwards.
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> Option<u32> {
        self.with(|c| c.state().current_index as u32)
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

#[cfg(feature = "autostart")]
mod autostart {
    use std::cell::RefCell;

    use slidetrack_core::CarouselConfig;

    use crate::listener::{EventListener, ListenOptions};
    use crate::mount::MountedCarousel;

    thread_local! {
        static MOUNTED: RefCell<Option<MountedCarousel>> = const { RefCell::new(None) };
        static READY: RefCell<Option<EventListener>> = const { RefCell::new(None) };
    }

    fn mount() {
        let mounted = super::mount_on_page(CarouselConfig::default());
        MOUNTED.with(|slot| *slot.borrow_mut() = mounted);
    }

    pub(super) fn arm() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.ready_state() != "loading" {
            mount();
            return;
        }
        let once = ListenOptions {
            once: true,
            ..ListenOptions::default()
        };
        // Kept for the page's lifetime; the listener removes itself after firing.
        let listener = EventListener::new(&document, "DOMContentLoaded", once, |_| mount());
        READY.with(|slot| *slot.borrow_mut() = Some(listener));
    }
}
