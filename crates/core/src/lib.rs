//! Domain logic for the Patrika bilingual news platform.
//!
//! This crate has no database or HTTP dependencies so the locale resolver,
//! category registry, and query-text helpers can be used by the API layer
//! and any future CLI tooling alike.

pub mod categories;
pub mod content;
pub mod error;
pub mod fallback;
pub mod locale;
pub mod related;
pub mod search;
pub mod slug;
pub mod types;
