//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_post_repo;
pub mod trip_repo;
pub mod user_repo;

pub use blog_post_repo::BlogPostRepo;
pub use trip_repo::TripRepo;
pub use user_repo::UserRepo;
