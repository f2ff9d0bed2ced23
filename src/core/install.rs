//! Installability state and the install-prompt flow.
//!
//! [`InstallState`] holds everything the install area renders from. It is
//! generic over the offer handle so the flow can be driven by the browser's
//! `beforeinstallprompt` event in the app and by a mock in tests.

use crate::core::error::InstallError;
use crate::models::{InstallAffordance, InstallOutcome, Platform, StandaloneSignals, UserChoice};
use crate::utils::log;

// ============================================================================
// Install Prompt
// ============================================================================

/// A captured "ask to install" opportunity from the host.
#[allow(async_fn_in_trait)]
pub trait InstallPrompt {
    /// Show the native install prompt.
    async fn prompt(&self) -> Result<(), InstallError>;

    /// Wait for the user's answer to the prompt.
    async fn user_choice(&self) -> Result<UserChoice, InstallError>;
}

// ============================================================================
// InstallState
// ============================================================================

/// Transient installability state for one mounted view.
#[derive(Clone, Debug)]
pub struct InstallState<O> {
    standalone: bool,
    platform: Platform,
    offer: Option<O>,
}

impl<O> InstallState<O> {
    /// Build the initial state from the mount-time environment query.
    pub fn new(signals: StandaloneSignals, platform: Platform) -> Self {
        Self {
            standalone: signals.is_standalone(),
            platform,
            offer: None,
        }
    }

    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn is_installable(&self) -> bool {
        self.offer.is_some()
    }

    pub fn offer(&self) -> Option<&O> {
        self.offer.as_ref()
    }

    /// Whether the host's install events should be listened to at all.
    ///
    /// iOS has no install prompt, so nothing is registered there.
    pub fn accepts_install_events(&self) -> bool {
        !self.platform.is_ios
    }

    /// Apply a display-mode change notification.
    pub fn set_display_mode(&mut self, standalone: bool) {
        self.standalone = standalone;
    }

    /// Hold a new install offer, returning the one it supersedes.
    ///
    /// On iOS the offer is handed straight back and nothing changes.
    pub fn offer_available(&mut self, offer: O) -> Option<O> {
        if !self.accepts_install_events() {
            return Some(offer);
        }
        self.offer.replace(offer)
    }

    /// The host reports the app was installed.
    pub fn app_installed(&mut self) {
        if !self.accepts_install_events() {
            return;
        }
        self.offer = None;
        self.standalone = true;
    }

    /// Drop the held offer after a completed prompt.
    pub fn consume_offer(&mut self) -> Option<O> {
        self.offer.take()
    }

    /// Select what the install area shows. First match wins.
    pub fn affordance(&self) -> InstallAffordance<'_, O> {
        if self.standalone {
            InstallAffordance::Standalone
        } else if self.platform.is_ios_browser_variant {
            InstallAffordance::BrowserVariantInstructions
        } else if self.platform.is_ios {
            InstallAffordance::RestrictedPlatformInstructions
        } else if let Some(offer) = &self.offer {
            InstallAffordance::Installable(offer)
        } else {
            InstallAffordance::Hidden
        }
    }
}

// ============================================================================
// Install Request
// ============================================================================

/// Shared access to an [`InstallState`] across an await point.
///
/// Both methods return `None` when the store no longer exists, e.g. the
/// view was unmounted while the prompt was open.
pub trait InstallStore<O> {
    fn peek<R>(&self, f: impl FnOnce(&InstallState<O>) -> R) -> Option<R>;
    fn modify<R>(&self, f: impl FnOnce(&mut InstallState<O>) -> R) -> Option<R>;
}

/// What a [`request_install`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallRequest {
    /// No offer was held; the host was not called.
    NoOffer,
    /// The prompt completed and the offer was cleared.
    Resolved(InstallOutcome),
    /// The host rejected; state is unchanged.
    Failed(InstallError),
}

/// Show the held install offer and clear it once the user answers.
///
/// Failures are logged and reported through [`InstallRequest::Failed`],
/// never returned as an error. Concurrent calls are not guarded: once the
/// first completes the offer is gone and later calls see
/// [`InstallRequest::NoOffer`].
pub async fn request_install<O, S>(store: &S) -> InstallRequest
where
    O: InstallPrompt + Clone,
    S: InstallStore<O>,
{
    let Some(offer) = store.peek(|s| s.offer().cloned()).flatten() else {
        return InstallRequest::NoOffer;
    };

    let result = async {
        offer.prompt().await?;
        offer.user_choice().await
    }
    .await;

    match result {
        Ok(choice) => {
            log::info(&format!(
                "User response to the install prompt: {} ({})",
                choice.outcome, choice.platform
            ));
            store.modify(|s| s.consume_offer());
            InstallRequest::Resolved(choice.outcome)
        }
        Err(e) => {
            log::error(&format!("Error during installation: {}", e));
            InstallRequest::Failed(e)
        }
    }
}
