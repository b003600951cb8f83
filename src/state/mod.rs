//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) and provided to the component
//! tree as `RwSignal` contexts from the application root. Each module keeps
//! its decision logic in plain functions so it tests natively.

pub mod auth;
pub mod toast;
