//! Platform glue for behaviors that differ between wasm and native builds.

/// Open `url` in a new browsing context. Axis labels use this to jump to
/// the external search page for a hashtag.
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        // A blocked popup returns Ok(None); nothing useful to do with it.
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(url: &str) {
    // Native builds exist for tests only; there is no browsing context.
    let _ = url;
}
