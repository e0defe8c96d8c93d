//! Glide Core
//!
//! Foundational pieces of the Glide cursor-driven carousel:
//!
//! - **Geometry**: the pure mapping from pointer position to strip translation
//! - **Events**: host-agnostic pointer event types
//! - **Style**: transform and transition values written to the moving strip
//! - **Config**: selectors, sensitivity, and transition timing
//!
//! Nothing here touches a host environment. Binding to a document lives in
//! `glide_layout` (headless) and `glide_platform_web` (browser).
//!
//! # Example
//!
//! ```rust
//! use glide_core::geometry::{compute_translation, Translation};
//!
//! // 400px window, 1000px strip, pointer on the right edge
//! let t = compute_translation(400.0, 0.0, 400.0, 1000.0);
//! assert_eq!(t, Translation::Offset(-600.0));
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod style;

pub use config::{CarouselConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use events::{PointerEventKind, PointerSample};
pub use geometry::{
    compute_translation, compute_translation_with, Bounds, TrackGeometry, Translation,
    DEFAULT_SENSITIVITY,
};
pub use style::{Easing, ElementStyle, Transform, Transition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::CarouselConfig;
    pub use crate::error::{Error, Result};
    pub use crate::events::{PointerEventKind, PointerSample};
    pub use crate::geometry::{compute_translation, Bounds, TrackGeometry, Translation};
    pub use crate::style::{Easing, ElementStyle, Transform, Transition};
}
