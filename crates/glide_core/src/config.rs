//! Carousel configuration
//!
//! Configuration is optional. Without a `glide.toml` the binder uses the
//! stock selectors (`.carousel-window`, `.skills-carousel`), a sensitivity of
//! 1.2 and a 100ms linear transform transition.
//!
//! ```toml
//! window_selector = ".carousel-window"
//! content_selector = ".skills-carousel"
//! sensitivity = 1.2
//! transition_ms = 100
//! easing = "linear"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::DEFAULT_SENSITIVITY;
use crate::style::{Easing, Transition};

/// File name looked up by [`CarouselConfig::load_from_dir`]
pub const CONFIG_FILE_NAME: &str = "glide.toml";

/// Binder configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CarouselConfig {
    /// Selector for the window region that observes the pointer
    #[serde(default = "default_window_selector")]
    pub window_selector: String,
    /// Selector for the moving content strip
    #[serde(default = "default_content_selector")]
    pub content_selector: String,
    /// Travel multiplier; above 1.0 the strip hits its bounds before the
    /// pointer reaches the window edges
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
    /// Transform transition duration in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Transform transition timing function
    #[serde(default)]
    pub easing: Easing,
}

fn default_window_selector() -> String {
    ".carousel-window".to_string()
}

fn default_content_selector() -> String {
    ".skills-carousel".to_string()
}

fn default_sensitivity() -> f64 {
    DEFAULT_SENSITIVITY
}

fn default_transition_ms() -> u64 {
    100
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            window_selector: default_window_selector(),
            content_selector: default_content_selector(),
            sensitivity: default_sensitivity(),
            transition_ms: default_transition_ms(),
            easing: Easing::default(),
        }
    }
}

impl CarouselConfig {
    /// Default configuration bound to custom selectors
    pub fn with_selectors(window: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            window_selector: window.into(),
            content_selector: content.into(),
            ..Default::default()
        }
    }

    /// Override the sensitivity
    pub fn sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Transition written alongside every animated translation
    pub fn motion_transition(&self) -> Transition {
        Transition::transform(Duration::from_millis(self.transition_ms), self.easing)
    }

    /// Check values the geometry relies on
    pub fn validate(&self) -> Result<()> {
        if self.window_selector.trim().is_empty() {
            return Err(Error::InvalidConfig("window_selector is empty".into()));
        }
        if self.content_selector.trim().is_empty() {
            return Err(Error::InvalidConfig("content_selector is empty".into()));
        }
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "sensitivity must be a positive number, got {}",
                self.sensitivity
            )));
        }
        Ok(())
    }

    /// Parse and validate TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CarouselConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `glide.toml` from a directory, falling back to defaults when absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Load a specific configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
