//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and listing cards while reading shared
//! state from Leptos context providers.

pub mod equipment_card;
pub mod navbar;
pub mod search_bar;
