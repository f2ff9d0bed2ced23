use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::ConfigError;

// =============================================================================
// Display Mode
// =============================================================================

/// Web app manifest `display` member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Standalone,
    MinimalUi,
    Browser,
}

impl DisplayMode {
    /// Media query that matches while the app runs in this display mode.
    pub fn media_query(self) -> String {
        let name = match self {
            Self::Fullscreen => "fullscreen",
            Self::Standalone => "standalone",
            Self::MinimalUi => "minimal-ui",
            Self::Browser => "browser",
        };
        format!("(display-mode: {})", name)
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Pixel dimensions of an icon, written `WxH` in the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Check whether this icon is at least `side` pixels in both dimensions.
    pub fn covers(&self, side: u32) -> bool {
        self.width >= side && self.height >= side
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for IconSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidIconSize(s.to_string());
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Ok(Self { width, height })
    }
}

impl Serialize for IconSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IconSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single manifest icon entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    /// Path relative to the manifest scope
    pub src: String,
    pub sizes: IconSize,
    /// MIME type (e.g., "image/png")
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn png(src: &str, side: u32) -> Self {
        Self {
            src: src.to_string(),
            sizes: IconSize::square(side),
            mime_type: "image/png".to_string(),
        }
    }
}

// =============================================================================
// Web App Manifest
// =============================================================================

/// Web app manifest descriptor handed to the build step.
///
/// Field names serialize to the keys browsers read from
/// `manifest.webmanifest` (`short_name`, `theme_color`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub display: DisplayMode,
    pub scope: String,
    pub start_url: String,
    pub icons: Vec<ManifestIcon>,
}

impl WebManifest {
    /// Pick the smallest icon that covers `side` pixels.
    ///
    /// Falls back to the largest icon when none is big enough.
    pub fn icon_for(&self, side: u32) -> Option<&ManifestIcon> {
        let area = |icon: &&ManifestIcon| icon.sizes.width as u64 * icon.sizes.height as u64;
        self.icons
            .iter()
            .filter(|icon| icon.sizes.covers(side))
            .min_by_key(area)
            .or_else(|| self.icons.iter().max_by_key(area))
    }

    /// Serialize to the JSON text of a `manifest.webmanifest` file.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WebManifest {
        WebManifest {
            name: "Sample".to_string(),
            short_name: "S".to_string(),
            description: String::new(),
            theme_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
            display: DisplayMode::Standalone,
            scope: "/".to_string(),
            start_url: "/".to_string(),
            icons: vec![
                ManifestIcon::png("icons/icon-512x512.png", 512),
                ManifestIcon::png("icons/icon-192x192.png", 192),
            ],
        }
    }

    #[test]
    fn test_icon_size_parse() {
        assert_eq!("192x192".parse::<IconSize>().unwrap(), IconSize::square(192));
        assert_eq!(
            "48X32".parse::<IconSize>().unwrap(),
            IconSize {
                width: 48,
                height: 32
            }
        );
        assert!("192".parse::<IconSize>().is_err());
        assert!("axb".parse::<IconSize>().is_err());
        assert_eq!(IconSize::square(512).to_string(), "512x512");
    }

    #[test]
    fn test_icon_for_picks_smallest_covering() {
        let manifest = sample();
        assert_eq!(
            manifest.icon_for(100).map(|i| i.sizes),
            Some(IconSize::square(192))
        );
        assert_eq!(
            manifest.icon_for(192).map(|i| i.sizes),
            Some(IconSize::square(192))
        );
        assert_eq!(
            manifest.icon_for(300).map(|i| i.sizes),
            Some(IconSize::square(512))
        );
    }

    #[test]
    fn test_icon_for_falls_back_to_largest() {
        let manifest = sample();
        assert_eq!(
            manifest.icon_for(1024).map(|i| i.sizes),
            Some(IconSize::square(512))
        );

        let empty = WebManifest {
            icons: vec![],
            ..sample()
        };
        assert!(empty.icon_for(192).is_none());
    }

    #[test]
    fn test_display_mode_media_query() {
        assert_eq!(
            DisplayMode::Standalone.media_query(),
            "(display-mode: standalone)"
        );
        assert_eq!(
            DisplayMode::MinimalUi.media_query(),
            "(display-mode: minimal-ui)"
        );
    }

    #[test]
    fn test_manifest_json_keys() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["short_name"], "S");
        assert_eq!(json["display"], "standalone");
        assert_eq!(json["icons"][1]["sizes"], "192x192");
        assert_eq!(json["icons"][1]["type"], "image/png");
    }
}
