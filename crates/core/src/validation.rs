//! Field-level validation for blog post writes.
//!
//! The HTTP boundary calls [`validate_blog_post`] before any storage
//! call is attempted, so a rejected payload never produces partial
//! state. Rules are checked in order and the first failure wins; the
//! returned message is exactly what the client sees in the 400 body.
//!
//! Trips intentionally have no field validator: trip writes accept
//! whatever shape the staff tooling sends, matching the behaviour the
//! site has always had.

use url::Url;

/// Maximum blog post title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum blog post content length, in characters.
pub const CONTENT_MAX_CHARS: usize = 50_000;

/// Validate a blog post candidate before persistence.
///
/// Returns `Ok(())` when every rule passes, or `Err` with the first
/// violated rule's human-readable message:
///
/// 1. title must be non-empty after trimming
/// 2. title must be at most 100 characters
/// 3. content must be non-empty after trimming
/// 4. content must be at most 50000 characters
/// 5. image, when present, must parse as a well-formed URL
pub fn validate_blog_post(
    title: &str,
    content: &str,
    image: Option<&str>,
) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(format!(
            "Title is too long (max {TITLE_MAX_CHARS} characters)"
        ));
    }
    if content.trim().is_empty() {
        return Err("Content is required".to_string());
    }
    if content.chars().count() > CONTENT_MAX_CHARS {
        return Err(format!(
            "Content is too long (max {CONTENT_MAX_CHARS} characters)"
        ));
    }
    if let Some(image) = image {
        if Url::parse(image).is_err() {
            return Err("Invalid image URL".to_string());
        }
    }
    Ok(())
}
