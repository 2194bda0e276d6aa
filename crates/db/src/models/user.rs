//! User model backing login identities.

use serde::Serialize;
use sqlx::FromRow;
use trailhead_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// The password hash is deliberately excluded from serialization.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Public view of a user, safe to embed in API responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// DTO for inserting a user. The hash is produced by the API layer;
/// plaintext passwords never reach this crate.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}
