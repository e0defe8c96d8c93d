//! Pointer event types consumed by the carousel binder

/// Pointer events the binder subscribes to on the window region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved while over the element
    Move,
    /// Pointer left the element
    Leave,
}

impl PointerEventKind {
    /// DOM event name for this kind
    pub fn dom_name(self) -> &'static str {
        match self {
            PointerEventKind::Move => "mousemove",
            PointerEventKind::Leave => "mouseleave",
        }
    }

    /// Parse a DOM event name
    pub fn from_dom_name(name: &str) -> Option<Self> {
        match name {
            "mousemove" => Some(PointerEventKind::Move),
            "mouseleave" => Some(PointerEventKind::Leave),
            _ => None,
        }
    }
}

/// Pointer position carried by an event, in viewport (client) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Horizontal client coordinate
    pub client_x: f64,
    /// Vertical client coordinate
    pub client_y: f64,
}

impl PointerSample {
    /// Create a sample at the given client position
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Create a sample with only a horizontal position
    pub fn at_x(client_x: f64) -> Self {
        Self {
            client_x,
            client_y: 0.0,
        }
    }
}
