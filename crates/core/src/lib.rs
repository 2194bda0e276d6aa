//! Domain logic shared across the Trailhead backend.
//!
//! Everything in this crate is pure: no I/O, no database access. The
//! `db` and `api` crates depend on it for types, errors, blog post
//! validation, trip filtering, and timestamp coercion.

pub mod error;
pub mod filter;
pub mod timeparse;
pub mod types;
pub mod validation;
