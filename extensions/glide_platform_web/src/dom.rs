//! `CarouselHost` over the browser DOM

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Event, HtmlElement, MouseEvent};

use glide_core::{Bounds, PointerEventKind, PointerSample, Transform, Transition};
use glide_layout::{CarouselHost, PointerCallback};

/// Browser document host
#[derive(Clone, Debug)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// Wrap a document
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }

    /// Underlying document
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn set_style(&self, element: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = element.style().set_property(property, value) {
            tracing::warn!(property, value, ?err, "failed to set style property");
            gloo::console::warn!("glide: failed to set style property", property, value, err);
        }
    }
}

fn rect_to_bounds(rect: &DomRect) -> Bounds {
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

impl CarouselHost for WebHost {
    type Element = HtmlElement;
    type Listener = EventListener;

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        // An invalid selector throws; treat it like no match
        self.document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn bounds(&self, element: &HtmlElement) -> Bounds {
        rect_to_bounds(&element.get_bounding_client_rect())
    }

    fn scroll_width(&self, element: &HtmlElement) -> f64 {
        element.scroll_width() as f64
    }

    fn set_transform(&self, element: &HtmlElement, transform: Transform) {
        self.set_style(element, "transform", &transform.to_string());
    }

    fn set_transition(&self, element: &HtmlElement, transition: &Transition) {
        self.set_style(element, "transition", &transition.to_string());
    }

    fn listen(
        &self,
        element: &HtmlElement,
        kind: PointerEventKind,
        callback: PointerCallback,
    ) -> EventListener {
        EventListener::new(element, kind.dom_name(), move |event: &Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                callback(&PointerSample::new(
                    event.client_x() as f64,
                    event.client_y() as f64,
                ));
            }
        })
    }
}

/// Run `f` once the document has been parsed
///
/// Runs immediately when the document is past `loading`; otherwise waits for
/// `DOMContentLoaded` and returns the pending listener.
pub fn on_document_ready<F>(document: &Document, f: F) -> Option<EventListener>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return None;
    }
    Some(EventListener::once(document, "DOMContentLoaded", move |_| f()))
}
