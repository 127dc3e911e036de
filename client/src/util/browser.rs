//! Browser location helpers.
//!
//! All functions are no-ops (or return `None`) outside the `hydrate` build.

/// `window.location.origin`, e.g. `https://example.com`.
#[must_use]
pub fn location_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Replace the current history entry with `url` without reloading.
pub fn replace_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)) {
            log::warn!("history.replaceState failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
