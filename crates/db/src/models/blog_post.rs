//! Blog post model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trailhead_core::types::{DbId, Timestamp};

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    /// The creator's email. Stamped server-side; never client-supplied.
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post.
///
/// Deliberately has no `author` or timestamp fields: whatever the
/// client sends for those is dropped at deserialization, and the
/// repository stamps them itself. An absent `title` or `content`
/// deserializes to the empty string so it reaches validation and
/// produces the "is required" message instead of a body-parse error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub image: Option<String>,
}

/// DTO for updating a blog post.
///
/// Title and content are always re-submitted in full by the editor;
/// an absent image leaves the stored value untouched. Absent `title`
/// or `content` falls through to validation, same as on create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub image: Option<String>,
}
