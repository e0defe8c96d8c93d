//! Headless in-memory document
//!
//! A minimal host that keeps just enough state to drive and observe a
//! carousel without a browser: selector lookup, element bounds and content
//! width, per-element pointer handlers, and the style each element ends up
//! with. Every style write is counted so tests can assert that nothing was
//! touched.
//!
//! # Example
//!
//! ```rust
//! use glide_core::Bounds;
//! use glide_layout::document::{Document, ElementSpec};
//!
//! let doc = Document::new();
//! let window = doc.insert(
//!     ElementSpec::new(".carousel-window").bounds(Bounds::new(0.0, 0.0, 400.0, 120.0)),
//! );
//! let strip = doc.insert(ElementSpec::new(".skills-carousel").scroll_width(1000.0));
//!
//! assert_eq!(doc.query(".carousel-window"), Some(window));
//! assert_eq!(doc.scroll_width(strip), 1000.0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use glide_core::{Bounds, ElementStyle, PointerEventKind, PointerSample, Transform, Transition};

use crate::event_handler::{ListenerId, PointerHandlers};
use crate::host::{CarouselHost, PointerCallback};
use crate::registry::ElementRegistry;

new_key_type! {
    /// Handle to an element in a [`Document`]
    pub struct NodeId;
}

/// Description of an element to insert
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    selectors: SmallVec<[String; 2]>,
    bounds: Bounds,
    scroll_width: Option<f64>,
}

impl ElementSpec {
    /// Element matched by `selector`
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selectors: smallvec::smallvec![selector.into()],
            ..Default::default()
        }
    }

    /// Element no selector resolves to
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Also match `selector`
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    /// Bounding rectangle
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Content width; defaults to the bounds width
    pub fn scroll_width(mut self, width: f64) -> Self {
        self.scroll_width = Some(width);
        self
    }
}

#[derive(Debug)]
struct NodeState {
    bounds: Bounds,
    scroll_width: f64,
    style: ElementStyle,
    handlers: PointerHandlers,
}

#[derive(Debug, Default)]
struct DocumentInner {
    nodes: SlotMap<NodeId, NodeState>,
    registry: ElementRegistry,
    style_writes: usize,
}

/// Shared, single-threaded in-memory document
///
/// Cloning yields another handle to the same document.
#[derive(Clone, Debug, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element
    pub fn insert(&self, spec: ElementSpec) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        let node = inner.nodes.insert(NodeState {
            bounds: spec.bounds,
            scroll_width: spec.scroll_width.unwrap_or(spec.bounds.width),
            style: ElementStyle::new(),
            handlers: PointerHandlers::new(),
        });
        for selector in spec.selectors {
            inner.registry.register(selector, node);
        }
        node
    }

    /// Remove an element together with its handlers
    pub fn remove(&self, node: NodeId) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.registry.unregister_node(node);
        inner.nodes.remove(node).is_some()
    }

    /// Check whether an element is still in the document
    pub fn contains(&self, node: NodeId) -> bool {
        self.inner.borrow().nodes.contains_key(node)
    }

    /// Resolve a selector to its first match
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        self.inner.borrow().registry.get(selector)
    }

    /// All elements, in insertion order
    pub fn nodes(&self) -> Vec<NodeId> {
        self.inner.borrow().nodes.keys().collect()
    }

    /// Element bounds (default bounds for removed elements)
    pub fn bounds(&self, node: NodeId) -> Bounds {
        self.inner
            .borrow()
            .nodes
            .get(node)
            .map(|n| n.bounds)
            .unwrap_or_default()
    }

    /// Move or resize an element
    pub fn set_bounds(&self, node: NodeId, bounds: Bounds) {
        if let Some(n) = self.inner.borrow_mut().nodes.get_mut(node) {
            n.bounds = bounds;
        }
    }

    /// Element content width (0 for removed elements)
    pub fn scroll_width(&self, node: NodeId) -> f64 {
        self.inner
            .borrow()
            .nodes
            .get(node)
            .map(|n| n.scroll_width)
            .unwrap_or(0.0)
    }

    /// Change an element's content width
    pub fn set_scroll_width(&self, node: NodeId, width: f64) {
        if let Some(n) = self.inner.borrow_mut().nodes.get_mut(node) {
            n.scroll_width = width;
        }
    }

    /// Current style of an element
    pub fn style(&self, node: NodeId) -> ElementStyle {
        self.inner
            .borrow()
            .nodes
            .get(node)
            .map(|n| n.style.clone())
            .unwrap_or_default()
    }

    /// Number of style writes across all elements
    pub fn style_writes(&self) -> usize {
        self.inner.borrow().style_writes
    }

    /// Number of pointer handlers on an element
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.inner
            .borrow()
            .nodes
            .get(node)
            .map(|n| n.handlers.len())
            .unwrap_or(0)
    }

    /// Number of pointer handlers across all elements
    pub fn total_listeners(&self) -> usize {
        self.inner
            .borrow()
            .nodes
            .values()
            .map(|n| n.handlers.len())
            .sum()
    }

    /// Deliver a pointer event to an element; returns how many handlers ran
    pub fn dispatch_pointer(
        &self,
        node: NodeId,
        kind: PointerEventKind,
        sample: PointerSample,
    ) -> usize {
        // Handlers write back into the document, so release the borrow first
        let callbacks = match self.inner.borrow().nodes.get(node) {
            Some(n) => n.handlers.callbacks(kind),
            None => return 0,
        };
        for callback in &callbacks {
            callback(&sample);
        }
        callbacks.len()
    }

    /// Pointer moved to `client_x` over an element
    pub fn pointer_move(&self, node: NodeId, client_x: f64) -> usize {
        self.dispatch_pointer(node, PointerEventKind::Move, PointerSample::at_x(client_x))
    }

    /// Pointer left an element
    pub fn pointer_leave(&self, node: NodeId) -> usize {
        self.dispatch_pointer(node, PointerEventKind::Leave, PointerSample::default())
    }

    fn write_style(&self, node: NodeId, apply: impl FnOnce(&mut ElementStyle)) {
        let mut inner = self.inner.borrow_mut();
        if let Some(n) = inner.nodes.get_mut(node) {
            apply(&mut n.style);
            inner.style_writes += 1;
        }
    }
}

/// Handler registration on a [`Document`]; dropping it removes the handler
#[derive(Debug)]
pub struct ListenerGuard {
    document: Weak<RefCell<DocumentInner>>,
    node: NodeId,
    kind: PointerEventKind,
    id: ListenerId,
}

impl ListenerGuard {
    /// Element the handler is attached to
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Event kind the handler observes
    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(inner) = self.document.upgrade() else {
            return;
        };
        let Ok(mut inner) = inner.try_borrow_mut() else {
            tracing::warn!(node = ?self.node, "document busy, listener not removed");
            return;
        };
        if let Some(n) = inner.nodes.get_mut(self.node) {
            n.handlers.remove(self.kind, self.id);
        }
    }
}

impl CarouselHost for Document {
    type Element = NodeId;
    type Listener = ListenerGuard;

    fn query(&self, selector: &str) -> Option<NodeId> {
        Document::query(self, selector)
    }

    fn bounds(&self, element: &NodeId) -> Bounds {
        Document::bounds(self, *element)
    }

    fn scroll_width(&self, element: &NodeId) -> f64 {
        Document::scroll_width(self, *element)
    }

    fn set_transform(&self, element: &NodeId, transform: Transform) {
        self.write_style(*element, |style| style.transform = Some(transform));
    }

    fn set_transition(&self, element: &NodeId, transition: &Transition) {
        self.write_style(*element, |style| style.transition = Some(transition.clone()));
    }

    fn listen(
        &self,
        element: &NodeId,
        kind: PointerEventKind,
        callback: PointerCallback,
    ) -> ListenerGuard {
        let id = self
            .inner
            .borrow_mut()
            .nodes
            .get_mut(*element)
            .map(|n| n.handlers.on(kind, callback))
            .unwrap_or(ListenerId::MAX);
        ListenerGuard {
            document: Rc::downgrade(&self.inner),
            node: *element,
            kind,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_insert_and_query() {
        let doc = Document::new();
        let a = doc.insert(ElementSpec::new(".a").selector("#first"));
        let b = doc.insert(ElementSpec::new(".a"));

        assert_eq!(doc.query(".a"), Some(a));
        assert_eq!(doc.query("#first"), Some(a));
        assert_eq!(doc.nodes(), vec![a, b]);

        assert!(doc.remove(a));
        assert!(!doc.contains(a));
        assert_eq!(doc.query(".a"), Some(b));
        assert_eq!(doc.query("#first"), None);
    }

    #[test]
    fn test_scroll_width_defaults_to_bounds() {
        let doc = Document::new();
        let n = doc.insert(ElementSpec::anonymous().bounds(Bounds::new(0.0, 0.0, 250.0, 10.0)));
        assert_eq!(doc.scroll_width(n), 250.0);
        doc.set_scroll_width(n, 900.0);
        assert_eq!(doc.scroll_width(n), 900.0);
    }

    #[test]
    fn test_style_writes_are_counted() {
        let doc = Document::new();
        let n = doc.insert(ElementSpec::new(".strip"));

        doc.set_transform(&n, Transform::translate_x(-10.0));
        doc.set_transition(&n, &Transition::None);

        assert_eq!(doc.style_writes(), 2);
        assert_eq!(doc.style(n).translate(), Some(-10.0));
        assert_eq!(doc.style(n).transition, Some(Transition::None));
    }

    #[test]
    fn test_listener_guard_removes_handler() {
        let doc = Document::new();
        let n = doc.insert(ElementSpec::new(".w"));
        let hits = Rc::new(Cell::new(0u32));

        let h = Rc::clone(&hits);
        let guard = doc.listen(
            &n,
            PointerEventKind::Move,
            Rc::new(move |_: &PointerSample| h.set(h.get() + 1)),
        );
        assert_eq!(doc.listener_count(n), 1);
        assert_eq!(doc.pointer_move(n, 5.0), 1);
        assert_eq!(doc.pointer_leave(n), 0);

        drop(guard);
        assert_eq!(doc.total_listeners(), 0);
        assert_eq!(doc.pointer_move(n, 5.0), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_handlers_can_write_back() {
        let doc = Document::new();
        let n = doc.insert(ElementSpec::new(".w"));

        let writer = doc.clone();
        let _guard = doc.listen(
            &n,
            PointerEventKind::Move,
            Rc::new(move |s: &PointerSample| {
                writer.set_transform(&n, Transform::translate_x(-s.client_x));
            }),
        );

        doc.pointer_move(n, 42.0);
        assert_eq!(doc.style(n).translate(), Some(-42.0));
    }

    #[test]
    fn test_dispatch_to_removed_node() {
        let doc = Document::new();
        let n = doc.insert(ElementSpec::new(".w"));
        doc.remove(n);
        assert_eq!(doc.pointer_move(n, 1.0), 0);
        assert_eq!(doc.bounds(n), Bounds::default());
    }
}
