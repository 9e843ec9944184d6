//! Domain types for trip planning.
//!
//! Request validation, station-name cleanup and timestamp rendering live
//! here. Nothing in this module performs I/O.

mod error;
mod station;
mod time;
mod trip;

pub use error::DomainError;
pub use station::clean_station_name;
pub use time::{LocalZone, first_non_empty, format_local_time};
pub use trip::{DEFAULT_RESULT_COUNT, MAX_RESULT_COUNT, MIN_RESULT_COUNT, Trip, TripRequest};
