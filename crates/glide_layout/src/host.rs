//! Host environment abstraction
//!
//! The binder never talks to a DOM directly. Anything that can look up
//! elements by selector, measure them, write their transform/transition and
//! deliver pointer events can drive a carousel:
//!
//! - [`Document`](crate::document::Document) - headless, in-memory host
//! - `glide_platform_web::WebHost` - browser host over `web-sys`

use std::rc::Rc;

use glide_core::{Bounds, PointerEventKind, PointerSample, Transform, Transition};

/// Callback for pointer events
///
/// Uses Rc since hosts deliver events on a single thread.
pub type PointerCallback = Rc<dyn Fn(&PointerSample)>;

/// Environment a carousel binds into
pub trait CarouselHost: 'static {
    /// Handle to an element in the host
    type Element: Clone + 'static;

    /// Registration returned by [`CarouselHost::listen`]
    ///
    /// Dropping it removes the observer.
    type Listener;

    /// Resolve a selector to its first matching element
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Current bounding rectangle in client coordinates
    fn bounds(&self, element: &Self::Element) -> Bounds;

    /// Total content width, including overflow (`scrollWidth`)
    fn scroll_width(&self, element: &Self::Element) -> f64;

    /// Write the element's transform
    fn set_transform(&self, element: &Self::Element, transform: Transform);

    /// Write the element's transition
    fn set_transition(&self, element: &Self::Element, transition: &Transition);

    /// Observe a pointer event on an element
    fn listen(
        &self,
        element: &Self::Element,
        kind: PointerEventKind,
        callback: PointerCallback,
    ) -> Self::Listener;
}
