//! DOM-backed carousel surface

use slidetrack_core::{
    BindError, CarouselSurface, ElementRole, FocusContext, NavControl, Selectors,
    SurfaceError,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

/// The page structure one carousel is bound to.
#[derive(Debug, Clone)]
pub struct DomSurface {
    window: Window,
    track: HtmlElement,
    viewport: Element,
    prev: Element,
    next: Element,
    cards: Vec<HtmlElement>,
}

fn query(root: &Document, selector: &str) -> Option<Element> {
    // An invalid selector reads as a missing element.
    root.query_selector(selector).ok().flatten()
}

fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set {property}={value}: {err:?}");
    }
}

impl DomSurface {
    /// Resolve every structural element. The track must exist and hold at
    /// least one card; the viewport and both controls must exist.
    pub fn locate(
        window: Window,
        document: &Document,
        selectors: &Selectors,
    ) -> Result<Self, BindError> {
        let track = query(document, &selectors.track)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(BindError::MissingElement(ElementRole::Track))?;

        let cards: Vec<HtmlElement> = query_all(&track, &selectors.card);
        if cards.is_empty() {
            return Err(BindError::NoCards);
        }

        let viewport = query(document, &selectors.viewport)
            .ok_or(BindError::MissingElement(ElementRole::Viewport))?;
        let prev = query(document, &selectors.prev)
            .ok_or(BindError::MissingElement(ElementRole::PrevControl))?;
        let next = query(document, &selectors.next)
            .ok_or(BindError::MissingElement(ElementRole::NextControl))?;

        Ok(Self {
            window,
            track,
            viewport,
            prev,
            next,
            cards,
        })
    }

    pub fn track(&self) -> &HtmlElement {
        &self.track
    }

    pub fn viewport(&self) -> &Element {
        &self.viewport
    }

    pub fn control(&self, control: NavControl) -> &Element {
        match control {
            NavControl::Prev => &self.prev,
            NavControl::Next => &self.next,
        }
    }

    /// Images inside the track, with their current `complete` flag.
    pub fn images(&self, selector: &str) -> Vec<HtmlImageElement> {
        query_all(&self.track, selector)
    }

    /// Classify the element holding keyboard focus.
    pub fn focus_context(&self, document: &Document) -> FocusContext {
        let Some(active) = document.active_element() else {
            return FocusContext::Document;
        };
        let node: &web_sys::Node = active.as_ref();
        if document
            .body()
            .is_some_and(|body| body.is_same_node(Some(node)))
        {
            return FocusContext::Document;
        }

        if self.viewport.contains(Some(node))
            || self.prev.contains(Some(node))
            || self.next.contains(Some(node))
        {
            return FocusContext::Carousel;
        }

        let editable = matches!(
            active.tag_name().to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT"
        ) || active
            .dyn_ref::<HtmlElement>()
            .is_some_and(HtmlElement::is_content_editable);
        if editable {
            FocusContext::EditableControl
        } else {
            FocusContext::OtherControl
        }
    }
}

impl CarouselSurface for DomSurface {
    fn viewport_width(&self) -> f32 {
        self.viewport.client_width() as f32
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn track_style(&self, property: &str) -> Result<String, SurfaceError> {
        let unavailable = || SurfaceError::StyleUnavailable(property.to_string());
        let style = self
            .window
            .get_computed_style(&self.track)
            .map_err(|_| unavailable())?
            .ok_or_else(unavailable)?;
        style
            .get_property_value(property)
            .map_err(|_| unavailable())
    }

    fn set_card_width(&mut self, px: u32) {
        let value = format!("{px}px");
        for card in &self.cards {
            set_style(card, "width", &value);
        }
    }

    fn set_track_offset(&mut self, px: f32) {
        set_style(&self.track, "transform", &format!("translateX({px}px)"));
    }

    fn set_transition_suspended(&mut self, suspended: bool) {
        if suspended {
            set_style(&self.track, "transition", "none");
        } else if let Err(err) = self.track.style().remove_property("transition") {
            log::warn!("failed to restore track transition: {err:?}");
        }
    }

    fn set_control_disabled(&mut self, control: NavControl, disabled: bool) {
        let element = self.control(control);
        if let Err(err) = element.toggle_attribute_with_force("disabled", disabled) {
            log::warn!("failed to toggle {control:?} disabled: {err:?}");
        }
    }
}
