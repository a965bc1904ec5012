//! Top navigation bar with identity and auth links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Shows the signed-in user's avatar initial, name
//! and a logout button, or login/signup links for anonymous visitors.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;
use crate::util::auth::install_pending_navigation;
use crate::util::redirect::{LANDING_PATH, LOGIN_PATH, SIGNUP_PATH};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let pending_nav = RwSignal::new(None::<String>);
    install_pending_navigation(pending_nav, use_navigate());

    let initial = move || auth.with(|a| a.user.as_ref().map_or('U', |u| u.initial())).to_string();
    let display_name = move || {
        auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()))
            .unwrap_or_default()
    };

    // Logout always succeeds locally; the server call inside is best-effort.
    let on_logout = Callback::new(move |()| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            auth.update(AuthState::sign_out);
            pending_nav.set(Some(LANDING_PATH.to_owned()));
        });
    });

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a href=LANDING_PATH class="navbar__brand">
                    "Rental Gears"
                </a>
                <div class="navbar__spacer"></div>
                <nav class="navbar__links">
                    <a href=LANDING_PATH class="navbar__link">
                        "Home"
                    </a>
                    <Show
                        when=move || auth.with(AuthState::is_logged_in)
                        fallback=|| {
                            view! {
                                <div class="navbar__guest">
                                    <a href=LOGIN_PATH class="btn btn--outline">
                                        "Login"
                                    </a>
                                    <a href=SIGNUP_PATH class="btn btn--primary">
                                        "Sign up"
                                    </a>
                                </div>
                            }
                        }
                    >
                        <div class="navbar__user">
                            <span class="navbar__avatar">{initial}</span>
                            <span class="navbar__name">{display_name}</span>
                            <button class="navbar__logout" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
