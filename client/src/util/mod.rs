//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and formatting decisions from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod format;
pub mod redirect;
