//! Trip model, including the embedded JSONB collections.
//!
//! Trips carry four embedded arrays (hotels, itinerary, images,
//! bookings). Rows created before those columns existed store NULL,
//! so the raw row type keeps them optional and [`Trip::from`]
//! normalizes on the way out: callers never see an absent array or an
//! absent week number.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use trailhead_core::filter::FacetedTrip;
use trailhead_core::timeparse;
use trailhead_core::types::{DbId, Timestamp};

/// A hotel stay embedded in a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub nights: i32,
    #[serde(default)]
    pub rating: Option<f32>,
}

/// One day of the trip itinerary: a day number plus its description
/// paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: i32,
    pub paragraphs: Vec<String>,
}

/// A gallery image, optionally tagged with the itinerary day it was
/// taken on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripImage {
    pub url: String,
    #[serde(default)]
    pub day: Option<i32>,
}

/// A seat reservation embedded in a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booker's email.
    pub user: String,
    pub seats: i32,
    pub booked_at: Timestamp,
}

/// Raw row from the `trips` table, before read-path normalization.
#[derive(Debug, FromRow)]
pub struct TripRow {
    pub id: DbId,
    pub destination: String,
    pub location: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub price: f64,
    pub full_price: f64,
    pub capacity: i32,
    pub trip_image: Option<String>,
    pub week_number: Option<i32>,
    pub difficulty: Option<String>,
    pub hotels: Option<Json<Vec<Hotel>>>,
    pub itinerary: Option<Json<Vec<ItineraryDay>>>,
    pub images: Option<Json<Vec<TripImage>>>,
    pub bookings: Option<Json<Vec<Booking>>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A trip as returned to callers: arrays always present, week number
/// always set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: DbId,
    pub destination: String,
    pub location: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub price: f64,
    pub full_price: f64,
    pub capacity: i32,
    pub trip_image: Option<String>,
    pub week_number: i32,
    pub difficulty: Option<String>,
    pub hotels: Vec<Hotel>,
    pub itinerary: Vec<ItineraryDay>,
    pub images: Vec<TripImage>,
    pub bookings: Vec<Booking>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Trip {
            id: row.id,
            destination: row.destination,
            location: row.location,
            start_date: row.start_date,
            end_date: row.end_date,
            price: row.price,
            full_price: row.full_price,
            capacity: row.capacity,
            trip_image: row.trip_image,
            week_number: row.week_number.unwrap_or(0),
            difficulty: row.difficulty,
            hotels: row.hotels.map(|j| j.0).unwrap_or_default(),
            itinerary: row.itinerary.map(|j| j.0).unwrap_or_default(),
            images: row.images.map(|j| j.0).unwrap_or_default(),
            bookings: row.bookings.map(|j| j.0).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl FacetedTrip for Trip {
    fn destination(&self) -> &str {
        &self.destination
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn start_date(&self) -> Timestamp {
        self.start_date
    }
    fn week_number(&self) -> i32 {
        self.week_number
    }
    fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }
}

/// DTO for creating a trip.
///
/// Dates accept RFC 3339, bare dates, or epoch milliseconds and are
/// coerced to UTC before insert. Everything except destination and the
/// dates is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrip {
    pub destination: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(deserialize_with = "timeparse::flexible")]
    pub start_date: Timestamp,
    #[serde(deserialize_with = "timeparse::flexible")]
    pub end_date: Timestamp,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub full_price: f64,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub trip_image: Option<String>,
    #[serde(default)]
    pub week_number: Option<i32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub images: Vec<TripImage>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// DTO for updating a trip. Only fields present in the payload are
/// applied; array fields are replaced wholesale, never merged
/// element-by-element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrip {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "timeparse::flexible_opt")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "timeparse::flexible_opt")]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub full_price: Option<f64>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub trip_image: Option<String>,
    #[serde(default)]
    pub week_number: Option<i32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub hotels: Option<Vec<Hotel>>,
    #[serde(default)]
    pub itinerary: Option<Vec<ItineraryDay>>,
    #[serde(default)]
    pub images: Option<Vec<TripImage>>,
    #[serde(default)]
    pub bookings: Option<Vec<Booking>>,
}
