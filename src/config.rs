//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! including the static PWA manifest and runtime caching policy handed to
//! the service-worker build step.

use crate::core::error::ConfigError;
use crate::models::{
    CacheOptions, CacheRule, CachingPolicy, CachingStrategy, DisplayMode, Expiration,
    ManifestIcon, WebManifest,
};

// =============================================================================
// Application Metadata
// =============================================================================

/// Full application name.
pub const APP_NAME: &str = "My PWA App";

/// Name used where space is limited (home screen label).
pub const APP_SHORT_NAME: &str = "PWA";

pub const APP_DESCRIPTION: &str = "A Progressive Web App built with Leptos";

/// Theme and splash background color.
pub const THEME_COLOR: &str = "#ffffff";
pub const BACKGROUND_COLOR: &str = "#ffffff";

// =============================================================================
// Installability Detection
// =============================================================================

/// Media query that matches while running as an installed app.
pub const STANDALONE_MEDIA_QUERY: &str = "(display-mode: standalone)";

/// Query-string marker some launchers add to the start URL.
pub const HOMESCREEN_MARKER: &str = "homescreen=1";

/// User-agent tokens identifying iOS devices.
pub const IOS_DEVICE_TOKENS: &[&str] = &["iPad", "iPhone", "iPod"];

/// User-agent token for Chrome on iOS.
pub const IOS_BROWSER_VARIANT_TOKEN: &str = "CriOS";

/// Host event fired when the browser offers to install the app.
pub const INSTALL_OPPORTUNITY_EVENT: &str = "beforeinstallprompt";

/// Host event fired once the app has been installed.
pub const APP_INSTALLED_EVENT: &str = "appinstalled";

/// Manual install instructions.
pub mod instructions {
    pub const IOS_CHROME_TITLE: &str = "To install this app on iOS Chrome:";
    pub const IOS_CHROME_STEPS: &[&str] = &[
        "Open this page in Safari",
        "Follow the Safari instructions below",
    ];

    pub const IOS_TITLE: &str = "To install this app on your iPhone:";
    pub const IOS_SHARE_STEP: &str = "Tap the Share button in Safari";
    pub const IOS_ADD_STEP: &str = "Scroll down and tap \"Add to Home Screen\"";
    pub const IOS_CONFIRM_STEP: &str = "Tap \"Add\" in the top right";

    pub const INSTALL_BUTTON: &str = "Install App";
}

// =============================================================================
// Web App Manifest
// =============================================================================

/// Icon side lengths shipped under `icons/`.
pub const ICON_SIZES: &[u32] = &[192, 512];

/// Build the web app manifest.
pub fn manifest() -> WebManifest {
    WebManifest {
        name: APP_NAME.to_string(),
        short_name: APP_SHORT_NAME.to_string(),
        description: APP_DESCRIPTION.to_string(),
        theme_color: THEME_COLOR.to_string(),
        background_color: BACKGROUND_COLOR.to_string(),
        display: DisplayMode::Standalone,
        scope: "/".to_string(),
        start_url: "/".to_string(),
        icons: ICON_SIZES
            .iter()
            .map(|&side| ManifestIcon::png(&format!("icons/icon-{side}x{side}.png"), side))
            .collect(),
    }
}

/// Manifest as `manifest.webmanifest` JSON.
pub fn manifest_json() -> Result<String, ConfigError> {
    manifest().to_json()
}

// =============================================================================
// Runtime Caching
// =============================================================================

/// Static asset cache settings.
pub mod asset_cache {
    /// Requests for these file types are served cache-first.
    pub const URL_PATTERN: &str = r"\.(?:js|css|html|png|jpg|jpeg|svg|gif)$";
    pub const NAME: &str = "assets-cache";
    pub const MAX_ENTRIES: u32 = 100;
    /// 30 days.
    pub const MAX_AGE_SECONDS: u64 = 30 * 24 * 60 * 60;
}

/// Build the runtime caching policy.
pub fn caching_policy() -> CachingPolicy {
    CachingPolicy {
        runtime_caching: vec![CacheRule {
            url_pattern: asset_cache::URL_PATTERN.to_string(),
            handler: CachingStrategy::CacheFirst,
            options: CacheOptions {
                cache_name: asset_cache::NAME.to_string(),
                expiration: Expiration {
                    max_entries: Some(asset_cache::MAX_ENTRIES),
                    max_age_seconds: Some(asset_cache::MAX_AGE_SECONDS),
                },
            },
        }],
    }
}

/// Caching policy as Workbox `runtimeCaching` JSON.
///
/// Each `urlPattern` is regex source text. The consumer must wrap it in
/// `new RegExp(...)`; Workbox routes a bare string by exact URL.
pub fn caching_policy_json() -> Result<String, ConfigError> {
    let policy = caching_policy();
    policy.validate()?;
    policy.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IconSize;

    #[test]
    fn test_manifest_values() {
        let m = manifest();
        assert_eq!(m.name, "My PWA App");
        assert_eq!(m.short_name, "PWA");
        assert_eq!(m.display, DisplayMode::Standalone);
        assert_eq!(m.display.media_query(), STANDALONE_MEDIA_QUERY);
        assert_eq!(m.icons.len(), 2);
        assert_eq!(m.icons[0].src, "icons/icon-192x192.png");
        assert_eq!(m.icons[1].sizes, IconSize::square(512));
        assert!(m.icons.iter().all(|i| i.mime_type == "image/png"));
    }

    #[test]
    fn test_manifest_json() {
        let json: serde_json::Value = serde_json::from_str(&manifest_json().unwrap()).unwrap();
        assert_eq!(json["start_url"], "/");
        assert_eq!(json["theme_color"], "#ffffff");
        assert_eq!(json["icons"][0]["sizes"], "192x192");
    }

    #[test]
    fn test_caching_policy_json() {
        let json: serde_json::Value =
            serde_json::from_str(&caching_policy_json().unwrap()).unwrap();
        let rule = &json["runtimeCaching"][0];
        assert_eq!(rule["handler"], "CacheFirst");
        assert_eq!(rule["options"]["cacheName"], "assets-cache");
        assert_eq!(rule["options"]["expiration"]["maxEntries"], 100);
        assert_eq!(rule["options"]["expiration"]["maxAgeSeconds"], 2_592_000);
    }

    #[test]
    fn test_url_pattern_is_regex_source() {
        let json: serde_json::Value =
            serde_json::from_str(&caching_policy_json().unwrap()).unwrap();
        let source = json["runtimeCaching"][0]["urlPattern"].as_str().unwrap();
        assert_eq!(source, asset_cache::URL_PATTERN);
        assert!(regex::Regex::new(source).unwrap().is_match("/main.css"));
    }

    #[test]
    fn test_asset_rule_matches_static_files() {
        let policy = caching_policy();
        let policy = policy.compile().unwrap();
        for url in ["/app.js", "/styles/site.css", "/icons/icon-192x192.png", "/logo.svg"] {
            assert!(policy.rule_for(url).is_some(), "{url} should be cached");
        }
        for url in ["/api/data", "/manifest.webmanifest", "/app.js?v=2"] {
            assert!(policy.rule_for(url).is_none(), "{url} should not be cached");
        }
    }
}
