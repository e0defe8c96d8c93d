//! Configuration lookup for the CLI
//!
//! An explicit `--config` path must exist. Otherwise `glide.toml` in the
//! working directory is used when present, and built-in defaults when not.

use std::path::Path;

use anyhow::{Context, Result};
use glide_core::CarouselConfig;

/// Resolve the configuration for this invocation
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<CarouselConfig> {
    match explicit {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => CarouselConfig::load_from_dir(cwd)
            .with_context(|| format!("Failed to load config from {}", cwd.display())),
    }
}
