//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching through the gateway,
//! submitting actions) and delegates rendering details to `components`.

pub mod admin;
pub mod bookings;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod services;
