//! `beforeinstallprompt` interop using web-sys.
//!
//! web-sys has no binding for `BeforeInstallPromptEvent`, so its members
//! are reached through the Reflect API.

use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Event;

use crate::core::error::InstallError;
use crate::core::install::InstallPrompt;
use crate::models::UserChoice;

/// A deferred `beforeinstallprompt` event held for later use.
#[derive(Clone, Debug)]
pub struct HostInstallOffer {
    event: Event,
}

impl HostInstallOffer {
    /// Take over an install opportunity, suppressing the browser's own
    /// mini-infobar.
    pub fn capture(event: Event) -> Self {
        event.prevent_default();
        Self { event }
    }

    /// Platforms the prompt would install for (e.g. `["web"]`).
    pub fn platforms(&self) -> Vec<String> {
        Reflect::get(&self.event, &"platforms".into())
            .ok()
            .filter(|v| Array::is_array(v))
            .map(|v| {
                Array::from(&v)
                    .iter()
                    .filter_map(|p| p.as_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl InstallPrompt for HostInstallOffer {
    async fn prompt(&self) -> Result<(), InstallError> {
        let prompt = Reflect::get(&self.event, &"prompt".into())
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .ok_or(InstallError::PromptUnavailable)?;

        let result = prompt
            .call0(&self.event)
            .map_err(|e| InstallError::PromptRejected(describe(&e)))?;

        // Older Chromium returned undefined instead of a promise
        if let Ok(promise) = result.dyn_into::<Promise>() {
            JsFuture::from(promise)
                .await
                .map_err(|e| InstallError::PromptRejected(describe(&e)))?;
        }
        Ok(())
    }

    async fn user_choice(&self) -> Result<UserChoice, InstallError> {
        let promise = Reflect::get(&self.event, &"userChoice".into())
            .ok()
            .and_then(|v| v.dyn_into::<Promise>().ok())
            .ok_or(InstallError::ChoiceUnavailable)?;

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| InstallError::ChoiceRejected(describe(&e)))?;

        serde_wasm_bindgen::from_value(value).map_err(|e| InstallError::InvalidChoice(e.to_string()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos::prelude::{LocalStorage, Owner, RwSignal, Update, WithUntracked};
    use wasm_bindgen_test::*;

    use super::*;
    use crate::core::{InstallRequest, InstallState, request_install};
    use crate::models::{InstallOutcome, Platform, StandaloneSignals};

    wasm_bindgen_test_configure!(run_in_browser);

    /// An event carrying the members of a `BeforeInstallPromptEvent`.
    fn install_event(prompt_body: &str, choice: &str) -> Event {
        let event = Event::new("beforeinstallprompt").unwrap();
        let prompt = Function::new_no_args(prompt_body);
        let choice = js_sys::JSON::parse(choice).unwrap();
        let platforms = Array::of1(&"web".into());

        Reflect::set(&event, &"prompt".into(), &prompt).unwrap();
        Reflect::set(&event, &"userChoice".into(), &Promise::resolve(&choice)).unwrap();
        Reflect::set(&event, &"platforms".into(), &platforms).unwrap();
        event
    }

    fn holding(offer: HostInstallOffer) -> RwSignal<InstallState<HostInstallOffer>, LocalStorage> {
        let state = RwSignal::new_local(InstallState::new(
            StandaloneSignals::default(),
            Platform::default(),
        ));
        state.update(|s| {
            s.offer_available(offer);
        });
        state
    }

    #[wasm_bindgen_test]
    fn test_platforms() {
        let offer = HostInstallOffer::capture(install_event("return undefined;", "{}"));
        assert_eq!(offer.platforms(), vec!["web".to_string()]);
    }

    #[wasm_bindgen_test]
    async fn test_dismissed_choice_clears_offer() {
        let owner = Owner::new();
        let offer = HostInstallOffer::capture(install_event(
            "return Promise.resolve();",
            r#"{"outcome":"dismissed","platform":"web"}"#,
        ));
        let state = owner.with(|| holding(offer));

        assert_eq!(
            request_install(&state).await,
            InstallRequest::Resolved(InstallOutcome::Dismissed)
        );
        assert!(!state.with_untracked(|s| s.is_installable()));
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    async fn test_rejected_prompt_keeps_offer() {
        let owner = Owner::new();
        let offer = HostInstallOffer::capture(install_event(
            "return Promise.reject('already used');",
            r#"{"outcome":"accepted","platform":"web"}"#,
        ));
        let state = owner.with(|| holding(offer));

        assert_eq!(
            request_install(&state).await,
            InstallRequest::Failed(InstallError::PromptRejected("already used".to_string()))
        );
        assert!(state.with_untracked(|s| s.is_installable()));
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    async fn test_malformed_choice_keeps_offer() {
        let owner = Owner::new();
        let offer = HostInstallOffer::capture(install_event(
            "return Promise.resolve();",
            r#"{"outcome":"maybe"}"#,
        ));
        let state = owner.with(|| holding(offer));

        assert!(matches!(
            request_install(&state).await,
            InstallRequest::Failed(InstallError::InvalidChoice(_))
        ));
        assert!(state.with_untracked(|s| s.is_installable()));
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    async fn test_event_without_prompt() {
        let owner = Owner::new();
        let offer = HostInstallOffer::capture(Event::new("beforeinstallprompt").unwrap());
        let state = owner.with(|| holding(offer));

        assert_eq!(
            request_install(&state).await,
            InstallRequest::Failed(InstallError::PromptUnavailable)
        );
        owner.cleanup();
    }
}
