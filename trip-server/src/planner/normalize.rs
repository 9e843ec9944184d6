//! Turning planner journeys into client trips.
//!
//! Each journey becomes one end-to-end [`Trip`]: it starts where the first
//! leg departs and ends where the last leg arrives. Intermediate changes
//! are not reported. Journeys with no legs are dropped.

use crate::domain::{LocalZone, Trip, clean_station_name, first_non_empty, format_local_time};
use crate::tfnsw::{Journey, TripPlanResponse, Waypoint};

/// Summarise every journey in the response, preserving upstream order.
pub fn normalize_journeys(response: &TripPlanResponse, zone: &LocalZone) -> Vec<Trip> {
    response
        .journeys()
        .iter()
        .filter_map(|journey| summarize_journey(journey, zone))
        .collect()
}

/// One trip for a journey, or `None` if it has no legs.
fn summarize_journey(journey: &Journey, zone: &LocalZone) -> Option<Trip> {
    let first = journey.legs().first()?;
    let last = journey.legs().last()?;

    Some(Trip {
        origin: clean_station_name(first.origin.display_name()),
        destination: clean_station_name(last.destination.display_name()),
        departure_time: departure_time(&first.origin, zone),
        arrival_time: arrival_time(&last.destination, zone),
    })
}

fn render_time(candidates: [Option<&str>; 3], zone: &LocalZone) -> String {
    first_non_empty(candidates)
        .map(|raw| format_local_time(raw, zone))
        .unwrap_or_default()
}

/// Departure display time for a waypoint.
fn departure_time(waypoint: &Waypoint, zone: &LocalZone) -> String {
    render_time(waypoint.departure_candidates(), zone)
}

/// Arrival display time for a waypoint.
fn arrival_time(waypoint: &Waypoint, zone: &LocalZone) -> String {
    render_time(waypoint.arrival_candidates(), zone)
}
