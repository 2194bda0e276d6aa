//! Handlers for the `/blog` resource.
//!
//! Reads are public; writes require a session, and update/delete are
//! author-scoped. The ownership check lives in the repository's SQL
//! predicate, so a missing post and a post owned by someone else both
//! surface as 404 -- the API does not reveal which ids exist to
//! non-owners.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use trailhead_core::error::CoreError;
use trailhead_core::types::DbId;
use trailhead_core::validation::validate_blog_post;
use trailhead_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use trailhead_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Parse a blog post id from the path.
///
/// A malformed id is a miss, not an error: it maps to the same 404 an
/// unknown id produces.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::NotFound { entity: "Post" }))
}

/// GET /api/blog
///
/// List all posts, most recent first. Public.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// POST /api/blog
///
/// Create a post. Requires a session; the author is always the acting
/// user's email, regardless of anything in the payload.
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    validate_blog_post(&input.title, &input.content, input.image.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let post = BlogPostRepo::create(&state.pool, &auth.email, &input).await?;

    tracing::info!(post_id = post.id, author = %post.author, "Blog post created");

    Ok(Json(post))
}

/// GET /api/blog/{id}
///
/// Get a single post. Public.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let id = parse_id(&id)?;
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post" }))?;
    Ok(Json(post))
}

/// PUT /api/blog/{id}
///
/// Update a post. Requires a session and ownership; a non-owner gets
/// the same 404 as an unknown id.
pub async fn update_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id)?;

    validate_blog_post(&input.title, &input.content, input.image.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let updated = BlogPostRepo::update_owned(&state.pool, id, &auth.email, &input).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post" }));
    }

    tracing::info!(post_id = id, author = %auth.email, "Blog post updated");

    Ok(Json(json!({ "message": "Post updated" })))
}

/// DELETE /api/blog/{id}
///
/// Delete a post. Requires a session and ownership; physical delete.
pub async fn delete_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id)?;

    let removed = BlogPostRepo::delete_owned(&state.pool, id, &auth.email).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post" }));
    }

    tracing::info!(post_id = id, author = %auth.email, "Blog post deleted");

    Ok(Json(json!({ "message": "Post deleted" })))
}
