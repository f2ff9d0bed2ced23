//! Counter demo component.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/counter/counter.module.css");

/// Button that counts its own clicks.
#[component]
pub fn Counter() -> impl IntoView {
    let count = RwSignal::new(0u32);

    view! {
        <button class=css::counter on:click=move |_| count.update(|n| *n += 1)>
            "count is " {count}
        </button>
    }
}
