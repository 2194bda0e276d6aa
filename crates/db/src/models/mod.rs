//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches
//!
//! Entities serialize with camelCase field names; the site frontend
//! consumes them directly.

pub mod blog_post;
pub mod trip;
pub mod user;
