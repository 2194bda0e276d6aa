//! Repository for the `trips` table.
//!
//! Trips have no ownership scoping: any authenticated staff member may
//! edit any trip, and there is no delete operation. Reads normalize
//! legacy rows (NULL arrays, NULL week number) via [`Trip::from`].

use sqlx::types::Json;
use sqlx::PgPool;
use trailhead_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip, TripRow, UpdateTrip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, destination, location, start_date, end_date, price, full_price, \
     capacity, trip_image, week_number, difficulty, hotels, itinerary, images, bookings, \
     created_at, updated_at";

/// Provides CRUD operations for trips (no delete).
pub struct TripRepo;

impl TripRepo {
    /// List all trips. Full scan, no sort guarantee; callers order
    /// client-side when they need "latest first".
    pub async fn list(pool: &PgPool) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips");
        let rows = sqlx::query_as::<_, TripRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Trip::from).collect())
    }

    /// Find a trip by id, normalized on read.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        let row = sqlx::query_as::<_, TripRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Trip::from))
    }

    /// Insert a new trip, returning the created row.
    ///
    /// A missing or zero week number is stored as 0; timestamps are
    /// stamped here. Dates were already coerced to UTC by the DTO.
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (destination, location, start_date, end_date, price,
                full_price, capacity, trip_image, week_number, difficulty,
                hotels, itinerary, images, bookings)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TripRow>(&query)
            .bind(&input.destination)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.price)
            .bind(input.full_price)
            .bind(input.capacity)
            .bind(&input.trip_image)
            .bind(input.week_number.unwrap_or(0))
            .bind(&input.difficulty)
            .bind(Json(&input.hotels))
            .bind(Json(&input.itinerary))
            .bind(Json(&input.images))
            .bind(Json(&input.bookings))
            .fetch_one(pool)
            .await?;
        Ok(Trip::from(row))
    }

    /// Apply a partial update. Only non-`None` fields in `input` are
    /// applied; array fields are replaced wholesale.
    ///
    /// Returns the number of rows matched (0 or 1). Zero means no trip
    /// with that id exists, which is not an error here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrip,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trips SET
                destination = COALESCE($2, destination),
                location = COALESCE($3, location),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                price = COALESCE($6, price),
                full_price = COALESCE($7, full_price),
                capacity = COALESCE($8, capacity),
                trip_image = COALESCE($9, trip_image),
                week_number = COALESCE($10, week_number),
                difficulty = COALESCE($11, difficulty),
                hotels = COALESCE($12, hotels),
                itinerary = COALESCE($13, itinerary),
                images = COALESCE($14, images),
                bookings = COALESCE($15, bookings),
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.destination)
        .bind(&input.location)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.price)
        .bind(input.full_price)
        .bind(input.capacity)
        .bind(&input.trip_image)
        .bind(input.week_number)
        .bind(&input.difficulty)
        .bind(input.hotels.as_ref().map(Json))
        .bind(input.itinerary.as_ref().map(Json))
        .bind(input.images.as_ref().map(Json))
        .bind(input.bookings.as_ref().map(Json))
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
