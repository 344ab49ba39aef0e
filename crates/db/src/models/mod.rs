//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for admin writes, validated with `validator`
//! - Localized accessors delegating to `patrika_core::locale`

pub mod category;
pub mod post;
pub mod profile;
pub mod session;
pub mod user;
