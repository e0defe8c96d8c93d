//! Glide Web Platform
//!
//! Binds cursor-driven carousels to the browser DOM.
//!
//! The host application decides when its markup is ready and calls one of
//! the entry points:
//!
//! ```js
//! import init, { bindCarousel } from "./glide_platform_web.js";
//!
//! await init();
//! const binding = bindCarousel(".carousel-window", ".skills-carousel");
//! // later, when the carousel is removed
//! binding?.dispose();
//! ```
//!
//! Pages that just want the stock behavior can call `startDefault()`, which
//! binds `.carousel-window` / `.skills-carousel` once the document has been
//! parsed and keeps the binding for the lifetime of the page.
//!
//! From Rust:
//!
//! ```ignore
//! use glide_core::CarouselConfig;
//! use glide_platform_web::bind;
//!
//! let handle = bind(&CarouselConfig::default())?;
//! ```

pub mod dom;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use glide_core::CarouselConfig;
use glide_layout::{BinderHandle, MouseScrollBinder};

pub use dom::{on_document_ready, WebHost};

/// Bind a carousel in the current document
///
/// Fails only on invalid configuration. `Ok(None)` means there is no
/// document or a selector did not resolve; nothing was attached.
pub fn bind(config: &CarouselConfig) -> glide_core::Result<Option<BinderHandle<WebHost>>> {
    config.validate()?;
    let Some(host) = WebHost::from_window() else {
        return Ok(None);
    };
    Ok(MouseScrollBinder::attach(Rc::new(host), config))
}

/// Live carousel binding exposed to JavaScript
#[wasm_bindgen]
#[derive(Debug)]
pub struct CarouselBinding {
    handle: Option<BinderHandle<WebHost>>,
}

#[wasm_bindgen]
impl CarouselBinding {
    /// Detach the pointer observers; safe to call more than once
    pub fn dispose(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.dispose();
        }
    }

    /// Whether the observers are still attached
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.handle.is_some()
    }
}

/// Bind a carousel with the default sensitivity and transition
#[wasm_bindgen(js_name = bindCarousel)]
pub fn bind_carousel(window_selector: &str, content_selector: &str) -> Option<CarouselBinding> {
    let config = CarouselConfig::with_selectors(window_selector, content_selector);
    match bind(&config) {
        Ok(handle) => handle.map(|handle| CarouselBinding {
            handle: Some(handle),
        }),
        Err(err) => {
            tracing::warn!(%err, "carousel not bound");
            gloo::console::warn!("glide: carousel not bound", err.to_string());
            None
        }
    }
}

/// Bind `.carousel-window` / `.skills-carousel`
#[wasm_bindgen(js_name = bindDefaultCarousel)]
pub fn bind_default_carousel() -> Option<CarouselBinding> {
    let config = CarouselConfig::default();
    bind_carousel(&config.window_selector, &config.content_selector)
}

/// Bind the default carousel once the document is parsed, for the page lifetime
#[wasm_bindgen(js_name = startDefault)]
pub fn start_default() {
    let Some(host) = WebHost::from_window() else {
        return;
    };
    let document = host.document().clone();
    let host = Rc::new(host);

    let pending = on_document_ready(&document, move || {
        if let Some(handle) = MouseScrollBinder::attach(host, &CarouselConfig::default()) {
            handle.forget();
        }
    });
    if let Some(listener) = pending {
        listener.forget();
    }
}
