//! Transport for NSW trip planner client.
//!
//! This module provides an HTTP client for the TfNSW Trip Planner API
//! (an EFA journey planner speaking `rapidJSON`).
//!
//! Key characteristics of the API:
//! - Origins and destinations may be free text; the planner resolves them
//! - Every stop reports up to three times (estimated, planned, base
//!   timetable), any of which may be missing
//! - Authentication is an `Authorization: apikey <key>` header

mod client;
mod error;
mod query;
mod types;

pub use client::{DEFAULT_BASE_URL, TfnswClient, TfnswConfig};
pub use error::TfnswError;
pub use query::TripQuery;
pub use types::{Journey, Leg, TripPlanResponse, Waypoint};
