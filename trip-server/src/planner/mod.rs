//! Trip planning: query the planner and normalize what comes back.
//!
//! [`TripPlanner`] ties together the query builder, the TfNSW client and
//! the normalizer. Callers build one at startup and share it.

mod normalize;
mod service;

pub use normalize::normalize_journeys;
pub use service::TripPlanner;
