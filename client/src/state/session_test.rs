use super::*;

use futures::executor::block_on;
use serde_json::json;

use crate::net::testing::MockTransport;
use crate::net::transport::Method;
use crate::state::auth::{AuthState, SessionPhase};
use crate::state::token_store::MemoryTokenStore;

// =============================================================
// Helpers
// =============================================================

type TestSession = Session<MockTransport, MemoryTokenStore>;

fn session(store: MemoryTokenStore) -> (TestSession, MockTransport) {
    let transport = MockTransport::new();
    let client = ApiClient::new("http://api.test", transport.clone(), store);
    (Session::new(client), transport)
}

fn user_json(id: &str) -> serde_json::Value {
    json!({"id": id, "email": "asha@example.com", "full_name": "Asha Rao"})
}

fn login_request() -> LoginRequest {
    LoginRequest { email: "asha@example.com".to_owned(), password: "secret".to_owned() }
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        full_name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "secret".to_owned(),
    }
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_without_token_is_anonymous_without_network() {
    let (session, transport) = session(MemoryTokenStore::new());

    let mut state = AuthState::default();
    state.resolve(block_on(session.bootstrap()));

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!state.loading);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn bootstrap_with_valid_token_authenticates() {
    let store = MemoryTokenStore::with_token("jwt-1");
    let (session, transport) = session(store.clone());
    transport.respond(200, user_json("u1"));

    let mut state = AuthState::default();
    state.resolve(block_on(session.bootstrap()));

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(store.get().as_deref(), Some("jwt-1"));
    let request = &transport.requests()[0];
    assert_eq!(request.url, "http://api.test/api/v1/users/me");
    assert_eq!(request.authorization().as_deref(), Some("Bearer jwt-1"));
}

#[test]
fn bootstrap_with_expired_token_clears_it() {
    let store = MemoryTokenStore::with_token("stale");
    let (session, transport) = session(store.clone());
    transport.respond(401, json!({"detail": "Could not validate credentials"}));

    let mut state = AuthState::default();
    state.resolve(block_on(session.bootstrap()));

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert_eq!(store.get(), None);
}

#[test]
fn bootstrap_network_failure_clears_token() {
    let store = MemoryTokenStore::with_token("jwt-1");
    let (session, transport) = session(store.clone());
    transport.fail(ApiError::Network("offline".to_owned()));

    assert_eq!(block_on(session.bootstrap()), None);
    assert_eq!(store.get(), None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_sets_token_and_user_together() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport.respond(200, json!({"token": "jwt-1", "user": user_json("u1")}));

    let user = block_on(session.login(&login_request())).unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(store.get().as_deref(), Some("jwt-1"));
    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://api.test/api/v1/auth/login");
    assert_eq!(request.body.as_deref(), Some(r#"{"email":"asha@example.com","password":"secret"}"#));
}

#[test]
fn login_response_with_both_token_keys_signs_in() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport.respond(
        200,
        json!({"access_token": "jwt-3", "token": "jwt-3", "token_type": "bearer", "user": user_json("u3")}),
    );

    let user = block_on(session.login(&login_request())).unwrap();

    assert_eq!(user.id, "u3");
    assert_eq!(store.get().as_deref(), Some("jwt-3"));
}

#[test]
fn login_with_token_only_fetches_identity_before_storing() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport
        .respond(200, json!({"access_token": "jwt-2", "token_type": "bearer"}))
        .respond(200, user_json("u2"));

    let user = block_on(session.login(&login_request())).unwrap();

    assert_eq!(user.id, "u2");
    assert_eq!(store.get().as_deref(), Some("jwt-2"));
    let requests = transport.requests();
    assert_eq!(requests[1].url, "http://api.test/api/v1/users/me");
    assert_eq!(requests[1].bearer.as_deref(), Some("jwt-2"));
}

#[test]
fn login_identity_failure_writes_nothing() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport
        .respond(200, json!({"access_token": "jwt-2"}))
        .respond(500, json!({"detail": "boom"}));

    assert!(block_on(session.login(&login_request())).is_err());
    assert_eq!(store.get(), None);
}

#[test]
fn login_rejection_propagates_and_writes_nothing() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport.respond(401, json!({"detail": "Invalid credentials"}));

    let err = block_on(session.login(&login_request())).unwrap_err();

    assert_eq!(err.user_message("Failed to login"), "Invalid credentials");
    assert_eq!(store.get(), None);
}

#[test]
fn login_without_token_is_missing_token() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport.respond(200, json!({"user": user_json("u1")}));

    assert_eq!(block_on(session.login(&login_request())), Err(ApiError::MissingToken));
    assert_eq!(store.get(), None);
}

#[test]
fn login_with_empty_token_is_missing_token() {
    let (session, transport) = session(MemoryTokenStore::new());
    transport.respond(200, json!({"token": "", "user": user_json("u1")}));

    assert_eq!(block_on(session.login(&login_request())), Err(ApiError::MissingToken));
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_with_token_signs_in_directly() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport.respond(200, json!({"token": "jwt-s", "user": user_json("u3")}));

    let user = block_on(session.signup(&signup_request())).unwrap();

    assert_eq!(user.id, "u3");
    assert_eq!(store.get().as_deref(), Some("jwt-s"));
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn signup_without_token_follows_up_with_login() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport
        .respond(200, user_json("u4"))
        .respond(200, json!({"access_token": "jwt-l"}))
        .respond(200, user_json("u4"));

    let user = block_on(session.signup(&signup_request())).unwrap();

    assert_eq!(user.id, "u4");
    assert_eq!(store.get().as_deref(), Some("jwt-l"));
    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "http://api.test/api/v1/auth/signup".to_owned(),
            "http://api.test/api/v1/auth/login".to_owned(),
            "http://api.test/api/v1/users/me".to_owned(),
        ]
    );
}

#[test]
fn signup_conflict_propagates_message() {
    let store = MemoryTokenStore::new();
    let (session, transport) = session(store.clone());
    transport.respond(400, json!({"detail": "Email already registered"}));

    let err = block_on(session.signup(&signup_request())).unwrap_err();

    assert_eq!(err.user_message("Failed to sign up"), "Email already registered");
    assert_eq!(store.get(), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_token_and_notifies_server() {
    let store = MemoryTokenStore::with_token("jwt-1");
    let (session, transport) = session(store.clone());
    transport.respond(200, json!({"ok": true}));

    block_on(session.logout());

    assert_eq!(store.get(), None);
    let request = &transport.requests()[0];
    assert_eq!(request.url, "http://api.test/api/v1/auth/logout");
    assert_eq!(request.bearer.as_deref(), Some("jwt-1"));
}

#[test]
fn logout_ignores_server_failure() {
    let store = MemoryTokenStore::with_token("jwt-1");
    let (session, transport) = session(store.clone());
    transport.fail(ApiError::Network("offline".to_owned()));

    block_on(session.logout());
    assert_eq!(store.get(), None);
}

#[test]
fn login_logout_sequences_end_anonymous() {
    for rounds in 1..=3 {
        let store = MemoryTokenStore::new();
        let (session, transport) = session(store.clone());
        let mut state = AuthState::default();
        state.resolve(block_on(session.bootstrap()));

        for round in 0..rounds {
            transport.respond(200, json!({"token": format!("jwt-{round}"), "user": user_json("u1")}));
            let user = block_on(session.login(&login_request())).unwrap();
            state.sign_in(user);
            assert!(state.is_logged_in());

            if round % 2 == 0 {
                transport.respond(204, json!(null));
            } else {
                transport.respond(500, json!({"detail": "down"}));
            }
            block_on(session.logout());
            state.sign_out();
        }

        assert_eq!(store.get(), None, "token left after {rounds} rounds");
        assert!(state.user.is_none());
        assert_eq!(state.phase(), SessionPhase::Anonymous);
    }
}
