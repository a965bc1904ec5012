//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected actions and the login/signup pages must apply identical
//! redirect behavior, so the decisions live here as plain functions and the
//! Leptos effect wiring is a thin layer over them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::redirect::login_path_with_next;

/// Where a protected action should take the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtectedNavigation {
    /// Signed in: go to the requested target.
    Proceed(String),
    /// Not signed in: go to login, carrying the target in `next`.
    Login(String),
}

impl ProtectedNavigation {
    pub fn path(&self) -> &str {
        match self {
            Self::Proceed(path) | Self::Login(path) => path,
        }
    }
}

/// Gate a protected action on `is_logged_in`.
///
/// While the bootstrap check is still running the user is not logged in yet,
/// so the action goes through login; the login page forwards straight to
/// `next` once bootstrap authenticates.
pub fn protected_navigation(auth: &AuthState, target: &str) -> ProtectedNavigation {
    if auth.is_logged_in() {
        ProtectedNavigation::Proceed(target.to_owned())
    } else {
        ProtectedNavigation::Login(login_path_with_next(target))
    }
}

/// Whether an auth page (login/signup) should hand off to its destination.
pub fn should_leave_auth_page(state: &AuthState) -> bool {
    !state.loading && state.is_logged_in()
}

/// Navigate to `destination` whenever the session becomes authenticated.
pub fn install_authenticated_redirect<D, F>(auth: RwSignal<AuthState>, destination: D, navigate: F)
where
    D: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_leave_auth_page(&auth.get()) {
            navigate(&destination(), NavigateOptions::default());
        }
    });
}

/// Navigate whenever a path is placed in `pending`, then clear it.
///
/// Callbacks and spawned tasks request navigation through the signal; the
/// router's navigate closure stays inside this effect.
pub fn install_pending_navigation<F>(pending: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
