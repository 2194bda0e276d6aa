pub mod auth;
pub mod blog;
pub mod health;
pub mod trips;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register      register (public)
/// /auth/login         login (public)
///
/// /blog               list (public), create (requires auth)
/// /blog/{id}          get (public), update/delete (requires auth + ownership)
///
/// /trips              list with optional filters (public), create (public)
/// /trips/facets       filter facets (public)
/// /trips/{id}         get (public), update (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/blog", blog::router())
        .nest("/trips", trips::router())
}
