//! Account creation page.
//!
//! Mirrors the login page: honours `?next=` (default `/`) and leaves as
//! soon as the session is authenticated.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::SignupRequest;
use crate::state::auth::AuthState;
use crate::state::session::AppSession;
use crate::util::auth::install_authenticated_redirect;
use crate::util::redirect::{NEXT_PARAM, resolve_next};

const SIGNUP_FAILED: &str = "Failed to sign up";

fn validate_signup_input(full_name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter your name, email and password.");
    }
    Ok(SignupRequest { full_name: full_name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let query = use_query_map();
    let next = Memo::new(move |_| resolve_next(query.read().get(NEXT_PARAM).as_deref()));

    install_authenticated_redirect(auth, move || next.get_untracked(), navigate);

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&full_name.get(), &email.get(), &password.get()) {
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
            match session.signup(&request).await {
                Ok(user) => auth.update(|a| a.sign_in(user)),
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    error.set(Some(e.user_message(SIGNUP_FAILED)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h2 class="auth-page__title">"Create account"</h2>
            <Show when=move || error.get().is_some()>
                <div class="auth-page__error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
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
                    "Sign up"
                </button>
            </form>
        </div>
    }
}
