use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{HOMESCREEN_MARKER, IOS_BROWSER_VARIANT_TOKEN, IOS_DEVICE_TOKENS};

// =============================================================================
// Platform Classification
// =============================================================================

/// Which install-instruction branch applies to the current browser.
///
/// Derived from user-agent sniffing, so treat it as a hint: a browser that
/// matches neither token gets no instructions and relies on the host's
/// install opportunity instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Platform {
    /// iPhone, iPad or iPod. No install prompt exists here.
    pub is_ios: bool,
    /// Chrome on iOS, which cannot add to the home screen at all.
    pub is_ios_browser_variant: bool,
}

impl Platform {
    /// Classify a user-agent string.
    ///
    /// `has_ms_stream` is the legacy `window.MSStream` marker; old Windows
    /// Phone browsers put an iPhone token in their UA and exposed it.
    pub fn classify(user_agent: &str, has_ms_stream: bool) -> Self {
        let is_ios = IOS_DEVICE_TOKENS.iter().any(|t| user_agent.contains(t)) && !has_ms_stream;
        Self {
            is_ios,
            is_ios_browser_variant: user_agent.contains(IOS_BROWSER_VARIANT_TOKEN),
        }
    }
}

// =============================================================================
// Standalone Detection
// =============================================================================

/// The three signals that each indicate the app runs installed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandaloneSignals {
    /// `(display-mode: standalone)` matches
    pub display_mode: bool,
    /// `navigator.standalone` (iOS Safari)
    pub navigator_standalone: bool,
    /// Launch URL carries the home-screen marker
    pub homescreen_marker: bool,
}

impl StandaloneSignals {
    pub fn new(display_mode: bool, navigator_standalone: bool, href: &str) -> Self {
        Self {
            display_mode,
            navigator_standalone,
            homescreen_marker: href.contains(HOMESCREEN_MARKER),
        }
    }

    pub fn is_standalone(&self) -> bool {
        self.display_mode || self.navigator_standalone || self.homescreen_marker
    }
}

// =============================================================================
// Install Prompt Outcome
// =============================================================================

/// The user's answer to the native install prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Dismissed => write!(f, "dismissed"),
        }
    }
}

/// Resolved value of `BeforeInstallPromptEvent.userChoice`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserChoice {
    pub outcome: InstallOutcome,
    #[serde(default)]
    pub platform: String,
}

// =============================================================================
// Install Affordance
// =============================================================================

/// What the install area should show, in precedence order.
#[derive(Debug, PartialEq, Eq)]
pub enum InstallAffordance<'a, O> {
    /// Already running installed; show nothing.
    Standalone,
    /// iOS Chrome: reopen the page in Safari.
    BrowserVariantInstructions,
    /// iOS Safari: Share, then "Add to Home Screen".
    RestrictedPlatformInstructions,
    /// A deferred install offer is held; show the install button.
    Installable(&'a O),
    Hidden,
}

impl<O> InstallAffordance<'_, O> {
    /// Check if this affordance renders anything.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Standalone | Self::Hidden)
    }
}
