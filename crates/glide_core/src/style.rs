//! Style values written to the moving strip
//!
//! The binder only ever touches two presentation properties on the strip:
//! `transform` (a horizontal translation) and `transition` (how the browser
//! animates between successive transforms). `ElementStyle` groups them so
//! hosts and tests can inspect the current state of an element in one place.
//!
//! # Example
//!
//! ```rust
//! use glide_core::style::{style, Transition};
//!
//! let s = style().translate_x(-600.0).transition(Transition::linear_transform_ms(100));
//! assert_eq!(s.to_css(), "transform: translateX(-600px); transition: transform 0.1s linear");
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Transform applied to the strip
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Horizontal translation in pixels
    TranslateX(f64),
}

impl Transform {
    /// Horizontal translation, normalizing `-0` to `0`
    pub fn translate_x(x: f64) -> Self {
        Transform::TranslateX(if x == 0.0 { 0.0 } else { x })
    }

    /// Horizontal offset of this transform
    pub fn x(&self) -> f64 {
        match *self {
            Transform::TranslateX(x) => x,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transform::TranslateX(x) => write!(f, "translateX({}px)", x),
        }
    }
}

/// CSS timing function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// CSS keyword
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Transition descriptor for the strip
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// No animation; the next transform applies immediately
    None,
    /// Animate a single property
    Property {
        /// CSS property name
        property: String,
        /// Animation duration
        duration: Duration,
        /// Timing function
        easing: Easing,
    },
}

impl Transition {
    /// Animate `transform` with the given duration and easing
    pub fn transform(duration: Duration, easing: Easing) -> Self {
        Transition::Property {
            property: "transform".to_string(),
            duration,
            easing,
        }
    }

    /// Animate `transform` linearly over `ms` milliseconds
    pub fn linear_transform_ms(ms: u64) -> Self {
        Self::transform(Duration::from_millis(ms), Easing::Linear)
    }

    /// Whether this transition disables animation
    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => f.write_str("none"),
            Transition::Property {
                property,
                duration,
                easing,
            } => write!(f, "{} {}s {}", property, duration.as_secs_f32(), easing),
        }
    }
}

/// Presentation state of an element
///
/// Properties are optional; an unset property has never been written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    /// Transform (translation)
    pub transform: Option<Transform>,
    /// Transition timing
    pub transition: Option<Transition>,
}

impl ElementStyle {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set transform
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Translate horizontally
    pub fn translate_x(self, x: f64) -> Self {
        self.transform(Transform::translate_x(x))
    }

    /// Set transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Disable transitions
    pub fn transition_none(self) -> Self {
        self.transition(Transition::None)
    }

    /// Current horizontal translation, if a transform was written
    pub fn translate(&self) -> Option<f64> {
        self.transform.map(|t| t.x())
    }

    /// Merge another style on top of this one
    ///
    /// Properties set in `other` override; unset ones leave `self` untouched.
    pub fn merge(&self, other: &ElementStyle) -> ElementStyle {
        ElementStyle {
            transform: other.transform.or(self.transform),
            transition: other
                .transition
                .clone()
                .or_else(|| self.transition.clone()),
        }
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        self.transform.is_none() && self.transition.is_none()
    }

    /// Render as inline CSS declarations
    pub fn to_css(&self) -> String {
        let mut decls = Vec::with_capacity(2);
        if let Some(transform) = &self.transform {
            decls.push(format!("transform: {}", transform));
        }
        if let Some(transition) = &self.transition {
            decls.push(format!("transition: {}", transition));
        }
        decls.join("; ")
    }
}

/// Create a new element style
pub fn style() -> ElementStyle {
    ElementStyle::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_css() {
        assert_eq!(Transform::translate_x(-600.0).to_string(), "translateX(-600px)");
        assert_eq!(Transform::translate_x(0.0).to_string(), "translateX(0px)");
        assert_eq!(Transform::translate_x(-0.0).to_string(), "translateX(0px)");
        assert_eq!(Transform::translate_x(-12.5).to_string(), "translateX(-12.5px)");
    }

    #[test]
    fn test_transition_css() {
        assert_eq!(Transition::None.to_string(), "none");
        assert_eq!(
            Transition::linear_transform_ms(100).to_string(),
            "transform 0.1s linear"
        );
        assert_eq!(
            Transition::transform(Duration::from_millis(250), Easing::EaseOut).to_string(),
            "transform 0.25s ease-out"
        );
    }

    #[test]
    fn test_style_merge() {
        let moved = style()
            .translate_x(-42.0)
            .transition(Transition::linear_transform_ms(100));
        let left = style().transition_none();

        let merged = moved.merge(&left);

        // Transform survives, transition is overridden
        assert_eq!(merged.translate(), Some(-42.0));
        assert_eq!(merged.transition, Some(Transition::None));
    }

    #[test]
    fn test_style_empty() {
        assert!(ElementStyle::new().is_empty());
        assert_eq!(ElementStyle::new().to_css(), "");
        assert!(!style().translate_x(0.0).is_empty());
    }

    #[test]
    fn test_easing_serde_names() {
        let e: Easing = serde_json::from_str("\"ease-in-out\"").unwrap();
        assert_eq!(e, Easing::EaseInOut);
        assert_eq!(serde_json::to_string(&Easing::Linear).unwrap(), "\"linear\"");
    }
}
