//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, redirects, form
//! state) and delegates rendering details to `components`.

pub mod equipment;
pub mod home;
pub mod login;
pub mod signup;
