//! Wire DTOs for the gateway and document-store boundaries.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated identity for the current session, as known to the
/// identity provider. Replaced wholesale on every session change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Opaque provider-assigned identifier (`localId` in Identity Toolkit).
    pub uid: String,
    /// Email the account was registered with.
    pub email: String,
}

/// A bookable service as served by the gateway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Price in pesos.
    #[serde(default)]
    pub price: f64,
    /// Card image URL; the card falls back to a stock image when absent.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
}

/// A booking owned by the current user (or any user, on the admin surface).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub service_id: String,
    #[serde(default)]
    pub service_title: String,
    /// ISO date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// 24-hour time, `HH:MM`.
    #[serde(default)]
    pub time: String,
    /// `pending`, `confirmed`, `completed`, or `cancelled`.
    #[serde(default = "default_status")]
    pub status: String,
    /// Booking owner's email; populated on the admin surface only.
    #[serde(default)]
    pub user_email: Option<String>,
}

fn default_status() -> String {
    "pending".to_owned()
}

/// Editable profile record stored at `user_profiles/{uid}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A user row on the admin users page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_owned()
}

/// Aggregate counts shown on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_services: u64,
    pub total_bookings: u64,
    pub pending_bookings: u64,
}
