//! Installability detection hook.
//!
//! Queries the environment once on mount and keeps [`InstallState`] in sync
//! with the browser's display-mode and install events.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, MediaQueryListEvent};

use crate::config::{APP_INSTALLED_EVENT, INSTALL_OPPORTUNITY_EVENT, STANDALONE_MEDIA_QUERY};
use crate::core::error::ListenerError;
use crate::core::{HostInstallOffer, InstallRequest, InstallState, InstallStore, request_install};
use crate::models::{Platform, StandaloneSignals};
use crate::utils::{EventListener, dom, log};

/// Install state held in a thread-local signal (the offer wraps a JS event).
pub type InstallSignal = RwSignal<InstallState<HostInstallOffer>, LocalStorage>;

impl InstallStore<HostInstallOffer> for InstallSignal {
    fn peek<R>(&self, f: impl FnOnce(&InstallState<HostInstallOffer>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut InstallState<HostInstallOffer>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Reactive installability for the current view.
#[derive(Clone, Copy)]
pub struct Installability {
    pub state: InstallSignal,
    listeners: StoredValue<Vec<EventListener>, LocalStorage>,
}

impl Installability {
    /// Show the native install prompt if an offer is held.
    ///
    /// Runs in the background; the outcome only shows up as a state change.
    pub fn request_install(&self) {
        let state = self.state;
        spawn_local(async move {
            if request_install(&state).await == InstallRequest::NoOffer {
                log::info("Install requested with no pending offer");
            }
        });
    }

    /// Event types currently subscribed to. Empty once the owner is gone.
    pub fn subscriptions(&self) -> Vec<&'static str> {
        self.listeners
            .try_with_value(|ls| ls.iter().map(EventListener::event_type).collect())
            .unwrap_or_default()
    }
}

/// Set up installability detection for the calling component.
///
/// All listeners are released when the component's owner is cleaned up.
pub fn use_installability() -> Installability {
    use_installability_with(dom::platform(), dom::standalone_signals())
}

/// Set up installability detection from an environment snapshot.
pub fn use_installability_with(platform: Platform, signals: StandaloneSignals) -> Installability {
    let state: InstallSignal = RwSignal::new_local(InstallState::new(signals, platform));

    let mut listeners = Vec::with_capacity(3);
    keep(&mut listeners, watch_display_mode(state));

    if state.with_untracked(|s| s.accepts_install_events()) {
        keep(&mut listeners, watch_install_opportunity(state));
        keep(&mut listeners, watch_app_installed(state));
    }

    // Dropping the stored value on cleanup unregisters every listener
    let listeners = StoredValue::new_local(listeners);

    Installability { state, listeners }
}

fn keep(listeners: &mut Vec<EventListener>, result: Result<EventListener, ListenerError>) {
    match result {
        Ok(listener) => listeners.push(listener),
        Err(e) => log::warn(&format!("Install detection degraded: {}", e)),
    }
}

fn watch_display_mode(state: InstallSignal) -> Result<EventListener, ListenerError> {
    let mql = dom::match_media(STANDALONE_MEDIA_QUERY)
        .ok_or_else(|| ListenerError::MediaQueryUnavailable(STANDALONE_MEDIA_QUERY.to_string()))?;

    EventListener::new(&mql, "change", move |event: Event| {
        if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
            let standalone = event.matches();
            state.update(|s| s.set_display_mode(standalone));
        }
    })
}

fn watch_install_opportunity(state: InstallSignal) -> Result<EventListener, ListenerError> {
    let window = dom::window().ok_or(ListenerError::NoWindow)?;

    EventListener::new(&window, INSTALL_OPPORTUNITY_EVENT, move |event: Event| {
        let offer = HostInstallOffer::capture(event);
        log::info(&format!(
            "Install available for platforms: {}",
            offer.platforms().join(", ")
        ));
        state.update(|s| {
            s.offer_available(offer);
        });
    })
}

fn watch_app_installed(state: InstallSignal) -> Result<EventListener, ListenerError> {
    let window = dom::window().ok_or(ListenerError::NoWindow)?;

    EventListener::new(&window, APP_INSTALLED_EVENT, move |_: Event| {
        log::info("App installed");
        state.update(|s| s.app_installed());
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const DESKTOP: Platform = Platform {
        is_ios: false,
        is_ios_browser_variant: false,
    };
    const IOS: Platform = Platform {
        is_ios: true,
        is_ios_browser_variant: false,
    };

    fn fire(event_type: &str) {
        let window = dom::window().unwrap();
        let event = Event::new(event_type).unwrap();
        window.dispatch_event(&event).unwrap();
    }

    fn mount(platform: Platform) -> (Owner, Installability) {
        let owner = Owner::new();
        let install = owner.with(|| use_installability_with(platform, StandaloneSignals::default()));
        (owner, install)
    }

    #[wasm_bindgen_test]
    fn test_registers_all_listeners() {
        let (owner, install) = mount(DESKTOP);
        assert_eq!(
            install.subscriptions(),
            vec!["change", INSTALL_OPPORTUNITY_EVENT, APP_INSTALLED_EVENT]
        );
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn test_install_events_update_state() {
        let (owner, install) = mount(DESKTOP);
        let state = install.state;

        fire(INSTALL_OPPORTUNITY_EVENT);
        assert!(state.with_untracked(|s| s.is_installable()));
        assert!(!state.with_untracked(|s| s.is_standalone()));

        fire(APP_INSTALLED_EVENT);
        assert!(!state.with_untracked(|s| s.is_installable()));
        assert!(state.with_untracked(|s| s.is_standalone()));
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn test_ios_only_watches_display_mode() {
        let (owner, install) = mount(IOS);
        let state = install.state;
        assert_eq!(install.subscriptions(), vec!["change"]);

        fire(INSTALL_OPPORTUNITY_EVENT);
        fire(APP_INSTALLED_EVENT);
        assert!(!state.with_untracked(|s| s.is_installable()));
        assert!(!state.with_untracked(|s| s.is_standalone()));
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn test_cleanup_releases_listeners() {
        let (owner, install) = mount(DESKTOP);
        owner.cleanup();

        assert!(install.subscriptions().is_empty());
        assert!(install.state.try_with_untracked(|_| ()).is_none());

        // Any listener left behind would call into a dropped closure here
        fire(INSTALL_OPPORTUNITY_EVENT);
        fire(APP_INSTALLED_EVENT);
        assert!(install.subscriptions().is_empty());
    }
}
