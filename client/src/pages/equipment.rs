//! Equipment detail page with the booking entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Viewing an item is public. "Book now" is a protected action: anonymous
//! visitors go to login with this page as `next`. The booking flow itself
//! lives outside this client, so signed-in users get a notice instead.

#[cfg(test)]
#[path = "equipment_test.rs"]
mod equipment_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::Item;
use crate::state::auth::AuthState;
use crate::state::items::FetchState;
use crate::state::session::AppSession;
use crate::util::auth::{ProtectedNavigation, install_pending_navigation, protected_navigation};
use crate::util::format::price_per_day_spaced;
use crate::util::redirect::equipment_path;

const BOOKING_UNAVAILABLE: &str = "Booking is not available yet.";

/// What pressing "Book now" does for the current session.
fn booking_outcome(auth: &AuthState, item_id: &str) -> Result<&'static str, String> {
    match protected_navigation(auth, &equipment_path(item_id)) {
        ProtectedNavigation::Proceed(_) => Ok(BOOKING_UNAVAILABLE),
        ProtectedNavigation::Login(path) => Err(path),
    }
}

#[component]
pub fn EquipmentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let pending_nav = RwSignal::new(None::<String>);
    install_pending_navigation(pending_nav, use_navigate());
    let params = use_params_map();

    let item_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let detail = RwSignal::new(FetchState::<Item>::Loading);
    let reload = RwSignal::new(0_u32);
    let notice = RwSignal::new(None::<&'static str>);

    load_item(session, item_id, detail, reload);

    let on_book = Callback::new(move |()| match booking_outcome(&auth.get_untracked(), &item_id.get_untracked()) {
        Ok(message) => notice.set(Some(message)),
        Err(login_path) => pending_nav.set(Some(login_path)),
    });

    let body = move || match detail.get() {
        FetchState::Loading => view! { <div class="detail-page__status">"Loading…"</div> }.into_any(),
        FetchState::NotFound => view! { <div class="detail-page__status">"Item not found."</div> }.into_any(),
        FetchState::Failed(message) => view! {
            <div class="detail-page__status detail-page__status--error">
                <p>{message}</p>
                <button class="btn btn--outline" on:click=move |_| reload.update(|n| *n += 1)>
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
        FetchState::Ready(item) => {
            let media = match item.image.clone() {
                Some(src) => view! { <img src=src alt=item.name.clone() class="detail-page__image"/> }.into_any(),
                None => view! { <div class="detail-page__placeholder">"No image"</div> }.into_any(),
            };
            view! {
                <div class="detail-page">
                    <div class="detail-page__media">{media}</div>
                    <div class="detail-page__info">
                        <h2 class="detail-page__name">{item.name.clone()}</h2>
                        <p class="detail-page__description">{item.description.clone().unwrap_or_default()}</p>
                        <div class="detail-page__price">{price_per_day_spaced(item.price_per_day)}</div>
                        <button class="btn btn--primary detail-page__book" on:click=move |_| on_book.run(())>
                            "Book now"
                        </button>
                        <Show when=move || notice.get().is_some()>
                            <p class="detail-page__notice">{move || notice.get().unwrap_or_default()}</p>
                        </Show>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! { <section class="detail-page-container">{body}</section> }
}

/// Fetch the item for the current route id, refetching when the id or
/// `reload` changes. A fetch for a previous id is aborted before the next
/// starts, so a slow stale response cannot overwrite the current item.
fn load_item(session: AppSession, item_id: Memo<String>, detail: RwSignal<FetchState<Item>>, reload: RwSignal<u32>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::cancel::LatestRequest;

        let latest = LatestRequest::new();
        let latest_on_cleanup = latest.clone();
        on_cleanup(move || latest_on_cleanup.cancel());

        Effect::new(move || {
            reload.track();
            let id = item_id.get();
            detail.set(FetchState::Loading);
            let session = session.clone();
            let cancel = latest.begin();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_item(session.client(), &id, &cancel).await;
                if let Err(e) = &result {
                    if !e.is_cancelled() {
                        log::error!("failed to fetch item {id}: {e}");
                    }
                }
                if let Some(next) = FetchState::from_result(result) {
                    detail.set(next);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, item_id, detail, reload);
    }
}
