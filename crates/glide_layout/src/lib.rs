//! Glide Layout
//!
//! Binds cursor-driven scrolling into a host document.
//!
//! - [`CarouselHost`] - what the binder needs from its environment
//! - [`MouseScrollBinder`] - resolves the two regions, attaches the pointer
//!   observers, and applies translations
//! - [`BinderHandle`] - live binding; drop or dispose to detach
//! - [`Document`] - headless host for tests and tooling
//!
//! # Architecture
//!
//! ```text
//! host pointer event (mousemove over window)
//!     ↓ CarouselHost::listen callback
//! MouseScrollBinder::handle_move
//!     ↓ bounds + scroll_width read fresh
//! glide_core::compute_translation_with  (pure)
//!     ↓ Translation
//! MouseScrollBinder::apply -> set_transform / set_transition
//! ```

pub mod binder;
pub mod document;
pub mod event_handler;
pub mod host;
pub mod registry;

pub use binder::{BinderHandle, MouseScrollBinder};
pub use document::{Document, ElementSpec, ListenerGuard, NodeId};
pub use event_handler::{ListenerId, PointerHandlers};
pub use host::{CarouselHost, PointerCallback};
pub use registry::ElementRegistry;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::binder::{BinderHandle, MouseScrollBinder};
    pub use crate::document::{Document, ElementSpec, NodeId};
    pub use crate::host::CarouselHost;
    pub use glide_core::prelude::*;
}
