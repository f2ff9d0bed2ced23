//! Root application module.
//!
//! Contains the main App component and application-level setup.

use leptos::prelude::*;

use crate::components::{Counter, InstallBanner};
use crate::config::{APP_DESCRIPTION, APP_NAME};

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// Renders the counter demo and the install affordance inside a single card.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <main class=css::root>
                <h1>{APP_NAME}</h1>
                <div class=css::card>
                    <Counter />
                    <InstallBanner />
                </div>
                <p class=css::description>{APP_DESCRIPTION}</p>
            </main>
        </ErrorBoundary>
    }
}
