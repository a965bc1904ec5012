//! Networking modules for the rental REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` builds authorized requests against the configured API base,
//! `transport` sends them, `api` names the endpoints, `types` defines the
//! wire schema and `error` the failure taxonomy.

pub mod api;
pub mod cancel;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
