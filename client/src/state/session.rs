//! Session operations: bootstrap, login, signup, logout.
//!
//! DESIGN
//! ======
//! [`Session`] owns the REST client (and through it the token store) and
//! performs the network half of every auth transition. It returns the
//! resulting identity instead of mutating view state, so the caller applies
//! it to `RwSignal<AuthState>` in one step. No ambient singleton: `App`
//! builds one [`AppSession`] and injects it through context.
//!
//! INVARIANTS
//! ==========
//! - The token store is written only after the matching user identity is in
//!   hand. A failed login/signup leaves the store untouched.
//! - A stored token that fails `/users/me` is cleared.
//! - Logout always clears the token, whatever the server says.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{CURRENT_USER_ENDPOINT, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, SIGNUP_ENDPOINT};
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::transport::{BrowserTransport, Transport};
use crate::net::types::{AuthResponse, LoginRequest, SignupRequest, User};
use crate::state::token_store::{BrowserTokenStore, TokenStore};

/// Session wired to `fetch()` and `localStorage`.
pub type AppSession = Session<BrowserTransport, BrowserTokenStore>;

impl AppSession {
    /// Session against the API base baked into this build.
    pub fn from_config() -> Self {
        Self::new(ApiClient::new(&crate::config::api_base_url(), BrowserTransport, BrowserTokenStore))
    }
}

#[derive(Clone, Debug)]
pub struct Session<T, S> {
    client: ApiClient<T, S>,
}

impl<T: Transport, S: TokenStore> Session<T, S> {
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    /// Validate a token left over from an earlier visit.
    ///
    /// Without a stored token this returns `None` without touching the
    /// network. Any failure of the identity check clears the token.
    pub async fn bootstrap(&self) -> Option<User> {
        self.client.store().get()?;
        match self.client.get::<User>(CURRENT_USER_ENDPOINT).await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("auth check failed: {e}");
                self.client.store().clear();
                None
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns the API failure, or [`ApiError::MissingToken`] if the response
    /// carried no credential. Nothing is persisted on error.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let response: AuthResponse = self.client.post(LOGIN_ENDPOINT, request).await?;
        self.establish(response).await
    }

    /// Create an account and sign in.
    ///
    /// When the API creates the account without issuing a token, a login
    /// with the same credentials follows.
    ///
    /// # Errors
    ///
    /// Returns the failure of the signup call or the follow-up login. Nothing
    /// is persisted on error.
    pub async fn signup(&self, request: &SignupRequest) -> Result<User, ApiError> {
        let response: AuthResponse = self.client.post(SIGNUP_ENDPOINT, request).await?;
        if response.credential().is_some() {
            return self.establish(response).await;
        }
        let login = LoginRequest { email: request.email.clone(), password: request.password.clone() };
        self.login(&login).await
    }

    /// Notify the server (best-effort) and forget the local credential.
    pub async fn logout(&self) {
        if let Err(e) = self.client.post_empty(LOGOUT_ENDPOINT).await {
            log::debug!("logout notification failed: {e}");
        }
        self.client.store().clear();
    }

    async fn establish(&self, response: AuthResponse) -> Result<User, ApiError> {
        let token = response.credential().ok_or(ApiError::MissingToken)?.to_owned();
        let user = match response.user {
            Some(user) => user,
            None => self.client.get_with_token(CURRENT_USER_ENDPOINT, &token).await?,
        };
        self.client.store().set(&token);
        Ok(user)
    }
}
