//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected_route` and `admin_redirect` implement the client-side access
//! policy; the rest render application chrome, reading shared state from
//! Leptos context providers.

pub mod admin_layout;
pub mod admin_redirect;
pub mod admin_sidebar;
pub mod navbar;
pub mod protected_route;
pub mod service_card;
pub mod toaster;
