//! Handlers for the `/trips` resource.
//!
//! Trips deliberately mirror the behaviour the site has always had:
//! no session check on create/update and no ownership scoping (one
//! operator, globally editable trips), and no delete endpoint. This
//! asymmetry with the blog resource is intentional.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use trailhead_core::error::CoreError;
use trailhead_core::filter::{derive_facets, filter_trips, TripFacets, TripFilter};
use trailhead_core::types::DbId;
use trailhead_db::models::trip::{CreateTrip, Trip, UpdateTrip};
use trailhead_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Optional filter parameters for the trip listing.
///
/// Absent parameters fall back to the sentinel "all" values, so a
/// plain `GET /api/trips` returns the full collection.
#[derive(Debug, Default, Deserialize)]
pub struct TripListParams {
    pub search: Option<String>,
    pub month: Option<u32>,
    pub week: Option<i32>,
    pub difficulty: Option<String>,
}

impl From<TripListParams> for TripFilter {
    fn from(params: TripListParams) -> Self {
        TripFilter {
            search: params.search.unwrap_or_default(),
            month: params.month.unwrap_or(0),
            week: params.week.unwrap_or(0),
            difficulty: params.difficulty.unwrap_or_default(),
        }
    }
}

/// Parse a trip id from the path.
///
/// Unlike blog posts, a malformed trip id is a 400, not a 404.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest("Invalid trip id".to_string()))
}

/// GET /api/trips
///
/// List trips, optionally filtered by `search`, `month`, `week`, and
/// `difficulty` query parameters. Public.
pub async fn list_trips(
    State(state): State<AppState>,
    Query(params): Query<TripListParams>,
) -> AppResult<Json<Vec<Trip>>> {
    let trips = TripRepo::list(&state.pool).await?;
    let filter = TripFilter::from(params);
    let filtered: Vec<Trip> = filter_trips(&trips, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(filtered))
}

/// GET /api/trips/facets
///
/// The distinct months, week numbers, and difficulties present in the
/// trip collection, for populating filter controls. Public.
pub async fn trip_facets(State(state): State<AppState>) -> AppResult<Json<TripFacets>> {
    let trips = TripRepo::list(&state.pool).await?;
    Ok(Json(derive_facets(&trips)))
}

/// POST /api/trips
///
/// Create a trip. No session check -- matches the existing behaviour.
pub async fn create_trip(
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<Json<Trip>> {
    let trip = TripRepo::create(&state.pool, &input).await?;

    tracing::info!(trip_id = trip.id, destination = %trip.destination, "Trip created");

    Ok(Json(trip))
}

/// GET /api/trips/{id}
///
/// Get a single trip, normalized on read. Public.
pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Trip>> {
    let id = parse_id(&id)?;
    let trip = TripRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip" }))?;
    Ok(Json(trip))
}

/// PUT /api/trips/{id}
///
/// Partial update; array fields are replaced wholesale. No session
/// check and no ownership scoping -- matches the existing behaviour.
pub async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id)?;

    let matched = TripRepo::update(&state.pool, id, &input).await?;
    if matched == 0 {
        return Err(AppError::Core(CoreError::NotFound { entity: "Trip" }));
    }

    tracing::info!(trip_id = id, "Trip updated");

    Ok(Json(json!({ "success": true, "modifiedCount": matched })))
}
