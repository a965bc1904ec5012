//! Login page honoring the `next` destination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Second half of the protected-action round-trip: whoever sent the user
//! here put the intended destination in `?next=`. Once the session is
//! authenticated (by this form, or by a bootstrap that finishes while the
//! page is open) the page navigates there.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::session::AppSession;
use crate::util::auth::install_authenticated_redirect;
use crate::util::redirect::{NEXT_PARAM, resolve_next, signup_path_with_next};

const LOGIN_FAILED: &str = "Failed to login";

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let query = use_query_map();
    let next = Memo::new(move |_| resolve_next(query.read().get(NEXT_PARAM).as_deref()));

    // A successful submit flips `auth`, which drives this redirect.
    install_authenticated_redirect(auth, move || next.get_untracked(), navigate);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.login(&request).await {
                Ok(user) => auth.update(|a| a.sign_in(user)),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    error.set(Some(e.user_message(LOGIN_FAILED)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h2 class="auth-page__title">"Log in"</h2>
            <Show when=move || error.get().is_some()>
                <div class="auth-page__error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
            </form>
            <p class="auth-page__footer">
                "Don't have an account? "
                <a href=move || signup_path_with_next(&next.get()) class="auth-page__link">
                    "Sign up"
                </a>
            </p>
        </div>
    }
}
