//! Search input for the listing grid.

use leptos::prelude::*;

/// Filtering is live as the user types; submitting only suppresses the
/// page reload.
#[component]
pub fn SearchBar(query: RwSignal<String>) -> impl IntoView {
    view! {
        <form class="search-bar" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search equipment, category or location..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button class="search-bar__button" type="submit">
                "Search"
            </button>
        </form>
    }
}
