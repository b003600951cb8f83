//! Admin panel pages, all rendered inside `AdminLayout`.

pub mod bookings;
pub mod dashboard;
pub mod services;
pub mod users;
