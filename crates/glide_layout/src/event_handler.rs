//! Pointer handler storage for headless elements
//!
//! Each element in a [`Document`](crate::document::Document) owns a
//! `PointerHandlers` table. Registration hands back a [`ListenerId`] so the
//! listener guard can remove exactly the handler it added.
//!
//! ```text
//! CarouselHost::listen(node, Move, cb)
//!     ↓
//! PointerHandlers::on(Move, cb) -> ListenerId
//!     ↓ Document::dispatch_pointer(node, Move, sample)
//! cb(&sample)
//!     ↓ ListenerGuard dropped
//! PointerHandlers::remove(ListenerId)
//! ```

use std::collections::HashMap;

use smallvec::SmallVec;

use glide_core::{PointerEventKind, PointerSample};

use crate::host::PointerCallback;

/// Identifier of a registered handler, unique within one element
pub type ListenerId = u64;

/// Handlers keyed by pointer event kind
#[derive(Default, Clone)]
pub struct PointerHandlers {
    handlers: HashMap<PointerEventKind, SmallVec<[(ListenerId, PointerCallback); 2]>>,
    next_id: ListenerId,
}

impl std::fmt::Debug for PointerHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHandlers")
            .field("len", &self.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl PointerHandlers {
    /// Create an empty handler table
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any handlers registered
    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(|v| v.is_empty())
    }

    /// Total number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.values().map(|v| v.len()).sum()
    }

    /// Check if a handler is registered for an event kind
    pub fn has_handler(&self, kind: PointerEventKind) -> bool {
        self.handlers.get(&kind).is_some_and(|v| !v.is_empty())
    }

    /// Register a handler
    pub fn on(&mut self, kind: PointerEventKind, callback: PointerCallback) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.entry(kind).or_default().push((id, callback));
        id
    }

    /// Remove a handler; returns whether it was registered
    pub fn remove(&mut self, kind: PointerEventKind, id: ListenerId) -> bool {
        let Some(list) = self.handlers.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.handlers.remove(&kind);
        }
        removed
    }

    /// Snapshot of handlers for a kind, in registration order
    ///
    /// Returned by value so callers can invoke them without holding a borrow
    /// of the table.
    pub fn callbacks(&self, kind: PointerEventKind) -> SmallVec<[PointerCallback; 2]> {
        self.handlers
            .get(&kind)
            .map(|list| list.iter().map(|(_, cb)| cb.clone()).collect())
            .unwrap_or_default()
    }
}
