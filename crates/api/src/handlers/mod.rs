//! HTTP handler modules, one per resource.

pub mod admin_posts;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod home;
pub mod posts;
pub mod profile;
pub mod search;
pub mod uploads;
