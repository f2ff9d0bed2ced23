//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every query degrades
//! to a "nothing detected" value when the API is missing.

use js_sys::Reflect;
use web_sys::{MediaQueryList, Window};

use crate::config::STANDALONE_MEDIA_QUERY;
use crate::models::{Platform, StandaloneSignals};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Evaluate a CSS media query against the current window.
pub fn match_media(query: &str) -> Option<MediaQueryList> {
    window()?.match_media(query).ok()?
}

/// Check if a media query currently matches.
pub fn media_matches(query: &str) -> bool {
    match_media(query).is_some_and(|mql| mql.matches())
}

/// Get `navigator.userAgent`, or an empty string.
pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Get the full current address (`location.href`).
pub fn current_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Read a property off an object and test it for JS truthiness.
fn is_truthy(target: &wasm_bindgen::JsValue, key: &str) -> bool {
    Reflect::get(target, &key.into()).is_ok_and(|v| v.is_truthy())
}

/// iOS Safari's non-standard `navigator.standalone` flag.
pub fn navigator_standalone() -> bool {
    window().is_some_and(|w| is_truthy(&w.navigator(), "standalone"))
}

/// Legacy `window.MSStream` marker set by old Windows Phone browsers.
pub fn has_ms_stream() -> bool {
    window().is_some_and(|w| is_truthy(&w, "MSStream"))
}

// =============================================================================
// Environment Snapshot
// =============================================================================

/// Query all standalone signals at once.
pub fn standalone_signals() -> StandaloneSignals {
    StandaloneSignals::new(
        media_matches(STANDALONE_MEDIA_QUERY),
        navigator_standalone(),
        &current_href(),
    )
}

/// Classify the current browser.
pub fn platform() -> Platform {
    Platform::classify(&user_agent(), has_ms_stream())
}
