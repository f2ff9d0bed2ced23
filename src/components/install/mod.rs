//! Install affordance component.
//!
//! Renders whichever of the following applies, or nothing when the app
//! already runs installed:
//!
//! | Environment | Display |
//! |-------------|---------|
//! | Chrome on iOS | Reopen in Safari instructions |
//! | Safari on iOS | Share → "Add to Home Screen" steps |
//! | Browser with a pending install offer | "Install App" button |

mod hooks;

use leptos::prelude::*;
use leptos_icons::Icon;

pub use hooks::{InstallSignal, Installability, use_installability, use_installability_with};

use crate::components::icons as ic;
use crate::config::instructions;
use crate::models::InstallAffordance;

stylance::import_crate_style!(css, "src/components/install/install.module.css");

/// Install button or manual install instructions for the current browser.
#[component]
pub fn InstallBanner() -> impl IntoView {
    let install = use_installability();
    let state = install.state;

    move || {
        state.with(|s| match s.affordance() {
            InstallAffordance::Standalone | InstallAffordance::Hidden => ().into_any(),
            InstallAffordance::BrowserVariantInstructions => {
                view! { <IosChromeInstructions /> }.into_any()
            }
            InstallAffordance::RestrictedPlatformInstructions => {
                view! { <IosInstructions /> }.into_any()
            }
            InstallAffordance::Installable(_) => view! {
                <button
                    class=css::installButton
                    on:click=move |_| install.request_install()
                >
                    <Icon icon=ic::INSTALL />
                    {instructions::INSTALL_BUTTON}
                </button>
            }
            .into_any(),
        })
    }
}

#[component]
fn IosChromeInstructions() -> impl IntoView {
    view! {
        <div class=css::instructions>
            <p>{instructions::IOS_CHROME_TITLE}</p>
            <ol>
                {instructions::IOS_CHROME_STEPS
                    .iter()
                    .map(|step| view! { <li>{*step}</li> })
                    .collect::<Vec<_>>()}
            </ol>
            <span class=css::stepIcon><Icon icon=ic::SAFARI /></span>
        </div>
    }
}

#[component]
fn IosInstructions() -> impl IntoView {
    view! {
        <div class=css::instructions>
            <p>{instructions::IOS_TITLE}</p>
            <ol>
                <li>
                    {instructions::IOS_SHARE_STEP}
                    <span class=css::stepIcon><Icon icon=ic::SHARE /></span>
                </li>
                <li>
                    {instructions::IOS_ADD_STEP}
                    <span class=css::stepIcon><Icon icon=ic::ADD_TO_HOME /></span>
                </li>
                <li>{instructions::IOS_CONFIRM_STEP}</li>
            </ol>
        </div>
    }
}
