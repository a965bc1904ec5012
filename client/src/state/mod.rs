//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `items`) so individual components can
//! depend on small focused models. `session` and `token_store` hold the
//! non-reactive half of the auth lifecycle.

pub mod auth;
pub mod items;
pub mod session;
pub mod token_store;
