//! Route definitions for the `/trips` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::trips;
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET  /          -> list_trips (optional filter query params)
/// POST /          -> create_trip
/// GET  /facets    -> trip_facets
/// GET  /{id}      -> get_trip
/// PUT  /{id}      -> update_trip
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips::list_trips).post(trips::create_trip))
        .route("/facets", get(trips::trip_facets))
        .route("/{id}", get(trips::get_trip).put(trips::update_trip))
}
