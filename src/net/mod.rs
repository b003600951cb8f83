//! Network layer: identity provider, document store, and REST gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! All outbound traffic goes through one of three modules: `identity`
//! (Identity Toolkit sessions and tokens), `firestore` (role/profile
//! documents and dashboard counts), and `api` (the QuickServe REST gateway).
//! Browser calls use `gloo-net`; native builds get stubs so the crate tests
//! off-browser.

pub mod api;
pub mod firestore;
pub mod identity;
pub mod types;
