//! Pointer-to-translation geometry
//!
//! Maps the horizontal pointer position inside the window region to a
//! horizontal translation of the moving strip:
//!
//! ```text
//!  window_left            center               window_left + width
//!      |---------------------|---------------------|
//!   offset < 0          offset = 0            offset > 0
//!   translate -> 0      translate = 0         translate -> -scrollable
//! ```
//!
//! The raw translation is `(offset / center) * scrollable * -sensitivity`,
//! clamped to `[-scrollable, 0]` so the strip always covers the window.
//! With a sensitivity above 1.0 the clamp is reached before the pointer
//! gets to either edge.

/// Default sensitivity multiplier
pub const DEFAULT_SENSITIVITY: f64 = 1.2;

/// Axis-aligned rectangle in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Rendered width
    pub width: f64,
    /// Rendered height
    pub height: f64,
}

impl Bounds {
    /// Create bounds from position and size
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Layout snapshot read from the host for a single pointer event
///
/// Built fresh on every motion event so resizes and reflows between events
/// are picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Window region left edge (client coordinates)
    pub window_left: f64,
    /// Window region rendered width
    pub window_width: f64,
    /// Moving strip total content width (`scrollWidth`)
    pub content_width: f64,
}

impl TrackGeometry {
    /// Create geometry from raw measurements
    pub fn new(window_left: f64, window_width: f64, content_width: f64) -> Self {
        Self {
            window_left,
            window_width,
            content_width,
        }
    }

    /// Create geometry from the window bounds and strip content width
    pub fn from_bounds(window: Bounds, content_width: f64) -> Self {
        Self::new(window.left, window.width, content_width)
    }

    /// Distance the strip can travel (content width beyond the window)
    pub fn scrollable_width(&self) -> f64 {
        self.content_width - self.window_width
    }

    /// Horizontal center of the window, relative to its left edge
    pub fn center(&self) -> f64 {
        self.window_width / 2.0
    }
}

/// Outcome of mapping a pointer position to a strip translation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Translation {
    /// Strip is no wider than the window; it rests at zero
    Rest,
    /// Clamped translation in pixels, within `[-scrollable_width, 0]`
    Offset(f64),
    /// Window has no usable width, the sensitivity is not positive, or an
    /// input was not finite; skip the event
    Unavailable,
}

impl Translation {
    /// Translation to write to the strip, if any
    pub fn offset(&self) -> Option<f64> {
        match *self {
            Translation::Rest => Some(0.0),
            Translation::Offset(x) => Some(x),
            Translation::Unavailable => None,
        }
    }
}

/// Compute the strip translation with the default sensitivity
pub fn compute_translation(
    pointer_x: f64,
    window_left: f64,
    window_width: f64,
    content_width: f64,
) -> Translation {
    compute_translation_with(
        pointer_x,
        &TrackGeometry::new(window_left, window_width, content_width),
        DEFAULT_SENSITIVITY,
    )
}

/// Compute the strip translation for a pointer at `pointer_x` (client coordinates)
pub fn compute_translation_with(
    pointer_x: f64,
    geometry: &TrackGeometry,
    sensitivity: f64,
) -> Translation {
    let scrollable = geometry.scrollable_width();
    if scrollable <= 0.0 {
        return Translation::Rest;
    }

    let center = geometry.center();
    let finite = center.is_finite()
        && scrollable.is_finite()
        && pointer_x.is_finite()
        && geometry.window_left.is_finite()
        && sensitivity.is_finite();
    if !finite || center <= 0.0 || sensitivity <= 0.0 {
        tracing::trace!(?geometry, pointer_x, sensitivity, "no usable geometry, skipping");
        return Translation::Unavailable;
    }

    let mouse_x = pointer_x - geometry.window_left;
    let offset = mouse_x - center;
    let raw = (offset / center) * scrollable * -sensitivity;
    let clamped = raw.min(0.0).max(-scrollable);

    // Avoid handing `-0` to the style layer
    let translate = if clamped == 0.0 { 0.0 } else { clamped };
    tracing::trace!(pointer_x, raw, translate, "computed translation");
    Translation::Offset(translate)
}
