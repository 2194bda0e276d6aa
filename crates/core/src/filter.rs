//! Trip filtering and facet derivation.
//!
//! The trips listing page offers a free-text search plus three
//! categorical filters (month, week, difficulty). The filter controls
//! are populated from facets derived from the trip collection itself,
//! so only values that actually occur are offered. Collections are
//! small (tens to low hundreds of trips) and everything here is a
//! whole-collection recompute over already-fetched data.

use chrono::Datelike;

use crate::types::Timestamp;

/// Read access to the trip fields the filter cares about.
///
/// Implemented by the persisted trip entity in the `db` crate; keeping
/// the trait here lets the filtering logic stay free of any storage
/// concern.
pub trait FacetedTrip {
    fn destination(&self) -> &str;
    fn location(&self) -> Option<&str>;
    fn start_date(&self) -> Timestamp;
    fn week_number(&self) -> i32;
    fn difficulty(&self) -> Option<&str>;
}

/// Distinct filterable values present in a trip collection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TripFacets {
    /// Calendar months (1-12) with at least one departing trip, ascending.
    pub months: Vec<u32>,
    /// Week numbers present, ascending.
    pub weeks: Vec<i32>,
    /// Non-empty difficulty strings, in first-seen order.
    pub difficulties: Vec<String>,
}

/// Current filter selection. Sentinel values mean "no constraint":
/// an empty `search`, `month == 0`, `week == 0`, empty `difficulty`.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    pub search: String,
    pub month: u32,
    pub week: i32,
    pub difficulty: String,
}

impl TripFilter {
    /// Whether a single trip passes every active clause.
    ///
    /// The free-text clause is a case-insensitive substring match
    /// against destination or location; month and week compare
    /// numerically; difficulty compares exactly (case-sensitive).
    pub fn matches<T: FacetedTrip>(&self, trip: &T) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_destination = trip.destination().to_lowercase().contains(&needle);
            let in_location = trip
                .location()
                .is_some_and(|l| l.to_lowercase().contains(&needle));
            if !in_destination && !in_location {
                return false;
            }
        }
        if self.month != 0 && trip.start_date().month() != self.month {
            return false;
        }
        if self.week != 0 && trip.week_number() != self.week {
            return false;
        }
        if !self.difficulty.is_empty() && trip.difficulty() != Some(self.difficulty.as_str()) {
            return false;
        }
        true
    }
}

/// Derive the three facet sets in a single pass over the collection.
pub fn derive_facets<T: FacetedTrip>(trips: &[T]) -> TripFacets {
    let mut months = Vec::new();
    let mut weeks = Vec::new();
    let mut difficulties: Vec<String> = Vec::new();

    for trip in trips {
        let month = trip.start_date().month();
        if !months.contains(&month) {
            months.push(month);
        }
        let week = trip.week_number();
        if !weeks.contains(&week) {
            weeks.push(week);
        }
        if let Some(difficulty) = trip.difficulty() {
            if !difficulty.is_empty() && !difficulties.iter().any(|d| d == difficulty) {
                difficulties.push(difficulty.to_string());
            }
        }
    }

    months.sort_unstable();
    weeks.sort_unstable();

    TripFacets {
        months,
        weeks,
        difficulties,
    }
}

/// Return the trips matching the filter, preserving input order.
pub fn filter_trips<'a, T: FacetedTrip>(trips: &'a [T], filter: &TripFilter) -> Vec<&'a T> {
    trips.iter().filter(|t| filter.matches(*t)).collect()
}
