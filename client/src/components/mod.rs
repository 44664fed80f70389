//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome, guards and listing cards while reading
//! shared state from Leptos context providers.

pub mod car_card;
pub mod footer;
pub mod gradient_background;
pub mod header;
pub mod require_auth;
pub mod sign_out_button;
pub mod site_layout;
pub mod spotlight_card;
