//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navbar, protected actions and the login/signup pages to
//! coordinate redirects and identity-dependent rendering. Provided to views
//! as `RwSignal<AuthState>` through Leptos context.
//!
//! LIFECYCLE
//! =========
//! `Bootstrapping -> { Authenticated, Anonymous }`, then free movement between
//! the two resolved phases on login/signup/logout. Nothing can move the state
//! back to `Bootstrapping`: `loading` is only ever cleared.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup check of a stored token still running.
    Bootstrapping,
    Authenticated,
    Anonymous,
}

/// Current user identity plus the one-shot bootstrap flag.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Derived on every call so it can never disagree with `user`.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Bootstrapping
        } else if self.is_logged_in() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Finish the bootstrap check with whatever identity it produced.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Replace the identity after a successful login or signup.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
