//! Cursor-driven carousel binder
//!
//! Binds a window region and a moving strip inside a [`CarouselHost`]. While
//! the pointer moves over the window, the strip is translated horizontally
//! according to [`compute_translation_with`]; when the pointer leaves, the
//! strip's transition is cleared so the next motion event lands without a
//! glide from the last resting position.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use glide_core::{Bounds, CarouselConfig};
//! use glide_layout::binder::MouseScrollBinder;
//! use glide_layout::document::{Document, ElementSpec};
//!
//! let doc = Rc::new(Document::new());
//! let window = doc.insert(
//!     ElementSpec::new(".carousel-window").bounds(Bounds::new(0.0, 0.0, 400.0, 100.0)),
//! );
//! let strip = doc.insert(ElementSpec::new(".skills-carousel").scroll_width(1000.0));
//!
//! let handle = MouseScrollBinder::attach(doc.clone(), &CarouselConfig::default())
//!     .expect("both selectors resolve");
//!
//! doc.pointer_move(window, 400.0);
//! assert_eq!(doc.style(strip).translate(), Some(-600.0));
//!
//! handle.dispose();
//! ```

use std::rc::Rc;

use glide_core::{
    compute_translation_with, CarouselConfig, PointerEventKind, PointerSample, TrackGeometry,
    Transform, Transition, Translation,
};

use crate::host::{CarouselHost, PointerCallback};

/// Maps pointer position over a window region to a translation of a strip
pub struct MouseScrollBinder<H: CarouselHost> {
    host: Rc<H>,
    window: H::Element,
    strip: H::Element,
    sensitivity: f64,
    motion_transition: Transition,
}

impl<H: CarouselHost> MouseScrollBinder<H> {
    /// Resolve both selectors and attach the motion and leave observers
    ///
    /// Returns `None` without touching the host beyond the two lookups when
    /// either selector does not resolve. An invalid configuration is rejected
    /// with a warning before any lookup.
    pub fn attach(host: Rc<H>, config: &CarouselConfig) -> Option<BinderHandle<H>> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "carousel not bound");
            return None;
        }
        let window = host.query(&config.window_selector)?;
        let strip = host.query(&config.content_selector)?;

        let binder = Rc::new(Self {
            host: Rc::clone(&host),
            window,
            strip,
            sensitivity: config.sensitivity,
            motion_transition: config.motion_transition(),
        });

        let on_move: PointerCallback = {
            let binder = Rc::clone(&binder);
            Rc::new(move |sample: &PointerSample| {
                binder.handle_move(sample);
            })
        };
        let on_leave: PointerCallback = {
            let binder = Rc::clone(&binder);
            Rc::new(move |_: &PointerSample| binder.handle_leave())
        };

        let listeners = vec![
            host.listen(&binder.window, PointerEventKind::Move, on_move),
            host.listen(&binder.window, PointerEventKind::Leave, on_leave),
        ];

        tracing::debug!(
            window = %config.window_selector,
            content = %config.content_selector,
            sensitivity = config.sensitivity,
            "carousel bound"
        );

        Some(BinderHandle { binder, listeners })
    }

    /// Attach with default settings and custom selectors
    pub fn attach_selectors(
        host: Rc<H>,
        window_selector: &str,
        content_selector: &str,
    ) -> Option<BinderHandle<H>> {
        Self::attach(
            host,
            &CarouselConfig::with_selectors(window_selector, content_selector),
        )
    }

    /// Read the current layout from the host
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::from_bounds(
            self.host.bounds(&self.window),
            self.host.scroll_width(&self.strip),
        )
    }

    /// Translation for a pointer sample against the current layout
    pub fn translation_for(&self, sample: &PointerSample) -> Translation {
        compute_translation_with(sample.client_x, &self.geometry(), self.sensitivity)
    }

    /// Pointer moved over the window
    pub fn handle_move(&self, sample: &PointerSample) -> Translation {
        let translation = self.translation_for(sample);
        Self::apply(
            &self.host,
            &self.strip,
            translation,
            &self.motion_transition,
        );
        translation
    }

    /// Pointer left the window
    pub fn handle_leave(&self) {
        self.host.set_transition(&self.strip, &Transition::None);
    }

    /// Write a translation to the strip
    ///
    /// - `Rest` writes `translateX(0px)` and leaves the transition alone
    /// - `Offset` writes the transform, then `motion_transition`
    /// - `Unavailable` writes nothing
    pub fn apply(
        host: &H,
        strip: &H::Element,
        translation: Translation,
        motion_transition: &Transition,
    ) {
        match translation {
            Translation::Rest => host.set_transform(strip, Transform::translate_x(0.0)),
            Translation::Offset(x) => {
                host.set_transform(strip, Transform::translate_x(x));
                host.set_transition(strip, motion_transition);
            }
            Translation::Unavailable => {}
        }
    }

    /// Window region element
    pub fn window(&self) -> &H::Element {
        &self.window
    }

    /// Moving strip element
    pub fn strip(&self) -> &H::Element {
        &self.strip
    }
}

/// Live binding returned by [`MouseScrollBinder::attach`]
///
/// Dropping or disposing the handle detaches both observers. Use
/// [`BinderHandle::forget`] to keep them for the lifetime of the host.
pub struct BinderHandle<H: CarouselHost> {
    binder: Rc<MouseScrollBinder<H>>,
    listeners: Vec<H::Listener>,
}

impl<H: CarouselHost> BinderHandle<H> {
    /// The bound carousel
    pub fn binder(&self) -> &MouseScrollBinder<H> {
        &self.binder
    }

    /// Number of attached observers
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Detach both observers
    ///
    /// The strip keeps whatever style was last written.
    pub fn dispose(self) {
        tracing::debug!(listeners = self.listeners.len(), "carousel unbound");
        drop(self);
    }

    /// Keep the observers attached for as long as the host lives
    pub fn forget(self) {
        std::mem::forget(self.listeners);
    }
}

impl<H: CarouselHost> std::fmt::Debug for BinderHandle<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinderHandle")
            .field("listeners", &self.listeners.len())
            .field("sensitivity", &self.binder.sensitivity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, ElementSpec, NodeId};
    use glide_core::Bounds;

    fn setup(window_width: f64, content_width: f64) -> (Rc<Document>, NodeId, NodeId) {
        let doc = Rc::new(Document::new());
        let window = doc.insert(
            ElementSpec::new(".carousel-window")
                .bounds(Bounds::new(0.0, 0.0, window_width, 80.0)),
        );
        let strip = doc.insert(ElementSpec::new(".skills-carousel").scroll_width(content_width));
        (doc, window, strip)
    }

    #[test]
    fn test_attach_registers_two_listeners() {
        let (doc, window, strip) = setup(400.0, 1000.0);
        let handle = MouseScrollBinder::attach(doc.clone(), &CarouselConfig::default()).unwrap();

        assert_eq!(handle.listener_count(), 2);
        assert_eq!(doc.listener_count(window), 2);
        assert_eq!(doc.listener_count(strip), 0);
        assert_eq!(*handle.binder().window(), window);
        assert_eq!(*handle.binder().strip(), strip);
        // Attaching writes no style
        assert_eq!(doc.style_writes(), 0);
    }

    #[test]
    fn test_missing_strip_is_noop() {
        let doc = Rc::new(Document::new());
        let window = doc.insert(ElementSpec::new(".carousel-window"));

        assert!(MouseScrollBinder::attach(doc.clone(), &CarouselConfig::default()).is_none());
        assert_eq!(doc.listener_count(window), 0);
    }

    #[test]
    fn test_invalid_sensitivity_is_rejected() {
        for sensitivity in [-1.2, 0.0, f64::NAN] {
            let (doc, window, strip) = setup(400.0, 1000.0);
            let config = CarouselConfig::default().sensitivity(sensitivity);

            assert!(MouseScrollBinder::attach(doc.clone(), &config).is_none());
            assert_eq!(doc.listener_count(window), 0);

            doc.pointer_move(window, 0.0);
            doc.pointer_move(window, 400.0);
            assert_eq!(doc.style_writes(), 0);
            assert_eq!(doc.style(strip).translate(), None);
        }
    }

    #[test]
    fn test_apply_rest_keeps_transition() {
        let (doc, _, strip) = setup(500.0, 500.0);
        doc.set_transition(&strip, &Transition::None);

        MouseScrollBinder::apply(
            &*doc,
            &strip,
            Translation::Rest,
            &Transition::linear_transform_ms(100),
        );

        let style = doc.style(strip);
        assert_eq!(style.translate(), Some(0.0));
        assert_eq!(style.transition, Some(Transition::None));
    }

    #[test]
    fn test_apply_unavailable_writes_nothing() {
        let (doc, _, strip) = setup(400.0, 1000.0);
        MouseScrollBinder::apply(
            &*doc,
            &strip,
            Translation::Unavailable,
            &Transition::linear_transform_ms(100),
        );
        assert_eq!(doc.style_writes(), 0);
    }

    #[test]
    fn test_custom_sensitivity() {
        let (doc, window, strip) = setup(400.0, 1000.0);
        let config = CarouselConfig::default().sensitivity(1.0);
        let _handle = MouseScrollBinder::attach(doc.clone(), &config).unwrap();

        // offset 50 of center 200 -> 0.25 * 600
        doc.pointer_move(window, 250.0);
        assert_eq!(doc.style(strip).translate(), Some(-150.0));
    }

    #[test]
    fn test_translation_for_reads_live_geometry() {
        let (doc, _, strip) = setup(400.0, 1000.0);
        let handle = MouseScrollBinder::attach(doc.clone(), &CarouselConfig::default()).unwrap();
        let binder = handle.binder();

        assert_eq!(
            binder.translation_for(&PointerSample::at_x(400.0)),
            Translation::Offset(-600.0)
        );
        doc.set_scroll_width(strip, 300.0);
        assert_eq!(
            binder.translation_for(&PointerSample::at_x(400.0)),
            Translation::Rest
        );
    }
}
