//! Repository for the `blog_posts` table.
//!
//! Update and delete fold the ownership check into the SQL predicate
//! itself (`WHERE id = $1 AND author = $2`), so there is never a gap
//! between an authorization check and the mutation. A wrong author and
//! a missing row are indistinguishable to callers: both report "no row
//! affected".

use sqlx::PgPool;
use trailhead_core::types::DbId;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, image, author, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// `author` is the acting user's email from the session, never the
    /// payload; timestamps are stamped here.
    pub async fn create(
        pool: &PgPool,
        author: &str,
        input: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (title, content, image, author)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image)
            .bind(author)
            .fetch_one(pool)
            .await
    }

    /// List all posts, most recently created first.
    ///
    /// No pagination; the corpus is small and callers render the whole
    /// list.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Find a post by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a post, but only when `author` matches the stored author.
    ///
    /// Returns `true` iff exactly that owned row was modified. An
    /// absent image in the patch leaves the stored image untouched.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        author: &str,
        input: &UpdateBlogPost,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blog_posts SET
                title = $3,
                content = $4,
                image = COALESCE($5, image),
                updated_at = now()
             WHERE id = $1 AND author = $2",
        )
        .bind(id)
        .bind(author)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.image)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a post, but only when `author` matches the stored author.
    ///
    /// Returns `true` iff a row was removed. Physical delete.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        author: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1 AND author = $2")
            .bind(id)
            .bind(author)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
