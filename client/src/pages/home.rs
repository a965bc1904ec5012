//! Landing page: hero, search and the listing grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The listing is public, but opening an item is a protected action:
//! anonymous visitors are sent to login with the item as `next`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::equipment_card::EquipmentCard;
use crate::components::search_bar::SearchBar;
use crate::net::types::Item;
use crate::state::auth::AuthState;
use crate::state::items::{FetchState, filter_items};
use crate::state::session::AppSession;
use crate::util::auth::{install_pending_navigation, protected_navigation};
use crate::util::redirect::equipment_path;

const LISTING_FAILED: &str = "Could not load equipment.";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let pending_nav = RwSignal::new(None::<String>);
    install_pending_navigation(pending_nav, use_navigate());

    let query = RwSignal::new(String::new());
    let listing = RwSignal::new(FetchState::<Vec<Item>>::Loading);
    let reload = RwSignal::new(0_u32);

    load_listing(session, listing, reload);

    let on_open = Callback::new(move |id: String| {
        let nav = protected_navigation(&auth.get_untracked(), &equipment_path(&id));
        pending_nav.set(Some(nav.path().to_owned()));
    });

    let grid = move || match listing.get() {
        FetchState::Loading => view! { <p class="home-page__status">"Loading equipments…"</p> }.into_any(),
        FetchState::Ready(items) => {
            let q = query.get();
            let cards = filter_items(&items, &q)
                .into_iter()
                .cloned()
                .map(|item| view! { <EquipmentCard item=item on_open=on_open/> })
                .collect_view();
            view! { <div class="home-page__grid">{cards}</div> }.into_any()
        }
        FetchState::NotFound | FetchState::Failed(_) => view! {
            <div class="home-page__status home-page__status--error">
                <p>{LISTING_FAILED}</p>
                <button class="btn btn--outline" on:click=move |_| reload.update(|n| *n += 1)>
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Rent the gear you need — fast."</h1>
                <p>"Cameras, drones, lights, and more. Short-term or long-term rentals."</p>
            </section>
            <SearchBar query=query/>
            {grid}
        </div>
    }
}

/// Fetch the listing now and again whenever `reload` changes. A new run
/// aborts the one before it, and unmounting aborts the last.
fn load_listing(session: AppSession, listing: RwSignal<FetchState<Vec<Item>>>, reload: RwSignal<u32>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::cancel::LatestRequest;

        let latest = LatestRequest::new();
        let latest_on_cleanup = latest.clone();
        on_cleanup(move || latest_on_cleanup.cancel());

        Effect::new(move || {
            reload.track();
            listing.set(FetchState::Loading);
            let session = session.clone();
            let cancel = latest.begin();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_items(session.client(), &cancel).await;
                if let Err(e) = &result {
                    if !e.is_cancelled() {
                        log::error!("failed to fetch listings: {e}");
                    }
                }
                if let Some(next) = FetchState::from_result(result) {
                    listing.set(next);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, listing, reload);
    }
}
